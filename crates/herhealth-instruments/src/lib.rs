//! herhealth-instruments
//!
//! Self-assessment definitions and the scoring engine. Pure data and pure
//! functions with no storage dependency. Defines the questions, category bands
//! and factor breakdown for each supported assessment.

pub mod bands;
pub mod breakdown;
pub mod engine;
pub mod error;
pub mod instruments;
pub mod recommendations;
pub mod scoring;

use herhealth_core::models::assessment::AssessmentType;

use bands::Band;
use engine::ScoringEngine;
use error::InstrumentError;
use scoring::Question;

/// Trait implemented by each self-assessment.
pub trait Instrument: Send + Sync {
    fn assessment_type(&self) -> AssessmentType;

    /// Unique identifier (e.g., "pcos", "menopause").
    fn id(&self) -> &str {
        self.assessment_type().as_str()
    }

    /// Human-readable name (e.g., "PCOS Risk Assessment").
    fn name(&self) -> &str;

    /// Questions in the order they are asked.
    fn questions(&self) -> &[Question];

    /// Category bands in ascending order, ending with a catch-all.
    fn bands(&self) -> &[Band];

    /// Shown in place of the key-factor list when nothing is significant.
    fn no_significant_factors(&self) -> &str;

    /// Validate this instrument's data and build its scoring engine.
    fn engine(&self) -> Result<ScoringEngine, InstrumentError> {
        ScoringEngine::from_instrument(self)
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::pcos::Pcos),
        Box::new(instruments::menstrual::Menstrual),
        Box::new(instruments::menopause::Menopause),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Build every engine, failing on the first malformed instrument.
pub fn load_engines() -> Result<Vec<ScoringEngine>, InstrumentError> {
    all_instruments().iter().map(|i| i.engine()).collect()
}
