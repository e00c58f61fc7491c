use serde::Serialize;
use ts_rs::TS;

use herhealth_core::models::assessment::{AssessmentRecord, AssessmentType, SeverityLevel};

use crate::Instrument;
use crate::bands::{Band, BandTable};
use crate::breakdown::{self, FactorScore, SignificanceThreshold};
use crate::error::InstrumentError;
use crate::scoring::{self, AnswerMap, QuestionSet};

/// Validated question set and band table for one assessment type.
///
/// Built once at load time from an [`Instrument`]; every scoring call after
/// that is pure.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    assessment_type: AssessmentType,
    name: String,
    questions: QuestionSet,
    bands: BandTable,
    no_significant_factors: String,
}

/// Live estimate for a partial (or complete) run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Estimate {
    pub normalized_score: u8,
    pub category: String,
    pub severity_level: SeverityLevel,
    pub answered: usize,
    pub total: usize,
}

/// Outcome of a completed run. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    pub assessment_type: AssessmentType,
    pub raw_score: u32,
    pub max_score: u32,
    pub normalized_score: u8,
    pub category: String,
    pub severity_level: SeverityLevel,
    pub summary: String,
    pub factors: Vec<FactorScore>,
    pub answers: AnswerMap,
}

impl AssessmentResult {
    pub fn key_factors(&self, threshold: SignificanceThreshold) -> Vec<&str> {
        breakdown::significant_factors(&self.factors, threshold)
    }

    /// The row handed to the persistence backend for `user_id`.
    pub fn to_record(&self, user_id: impl Into<String>) -> AssessmentRecord {
        AssessmentRecord::new(
            user_id,
            self.assessment_type,
            self.normalized_score,
            self.severity_level,
            self.answers.to_responses(),
        )
    }
}

impl ScoringEngine {
    pub fn from_instrument<I: Instrument + ?Sized>(instrument: &I) -> Result<Self, InstrumentError> {
        Ok(Self {
            assessment_type: instrument.assessment_type(),
            name: instrument.name().to_string(),
            questions: QuestionSet::new(instrument.questions().to_vec())?,
            bands: BandTable::new(instrument.bands().to_vec())?,
            no_significant_factors: instrument.no_significant_factors().to_string(),
        })
    }

    pub fn assessment_type(&self) -> AssessmentType {
        self.assessment_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn bands(&self) -> &BandTable {
        &self.bands
    }

    pub fn normalized_score(&self, answers: &AnswerMap) -> u8 {
        scoring::normalized_score(&self.questions, answers)
    }

    pub fn classify(&self, score: u8) -> &Band {
        self.bands.classify(score)
    }

    pub fn breakdown(&self, answers: &AnswerMap) -> Vec<FactorScore> {
        breakdown::project(&self.questions, answers)
    }

    pub fn estimate(&self, answers: &AnswerMap) -> Estimate {
        let normalized_score = self.normalized_score(answers);
        let band = self.classify(normalized_score);
        Estimate {
            normalized_score,
            category: band.label.clone(),
            severity_level: band.severity,
            answered: answers.len(),
            total: self.questions.len(),
        }
    }

    /// Score a complete answer map. Partial maps are rejected so a result
    /// only ever exists for a finished run.
    pub fn evaluate(&self, answers: &AnswerMap) -> Result<AssessmentResult, InstrumentError> {
        if !answers.is_complete(&self.questions) {
            return Err(InstrumentError::Incomplete {
                answered: answers.len(),
                total: self.questions.len(),
            });
        }

        let normalized_score = self.normalized_score(answers);
        let band = self.classify(normalized_score);
        Ok(AssessmentResult {
            assessment_type: self.assessment_type,
            raw_score: scoring::raw_score(answers),
            max_score: self.questions.max_score(),
            normalized_score,
            category: band.label.clone(),
            severity_level: band.severity,
            summary: band.summary.clone(),
            factors: self.breakdown(answers),
            answers: answers.clone(),
        })
    }

    /// Comma-separated key factors, or the instrument's fallback phrase.
    pub fn key_factor_summary(&self, factors: &[FactorScore], threshold: SignificanceThreshold) -> String {
        let names = breakdown::significant_factors(factors, threshold);
        if names.is_empty() {
            self.no_significant_factors.clone()
        } else {
            names.join(", ")
        }
    }
}
