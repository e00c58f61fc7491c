use thiserror::Error;

use herhealth_instruments::error::InstrumentError;

use crate::step::Step;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlowError {
    #[error("cannot {action} during {step}")]
    InvalidTransition { step: Step, action: &'static str },

    #[error(transparent)]
    Instrument(#[from] InstrumentError),
}
