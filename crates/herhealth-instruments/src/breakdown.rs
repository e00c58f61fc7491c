use serde::{Deserialize, Serialize};
use ts_rs::TS;

use herhealth_core::models::assessment::SeverityLevel;

use crate::scoring::{AnswerMap, QuestionSet};

/// One bar of the factor breakdown chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FactorScore {
    pub factor_name: String,
    /// Selected score, or 0 while unanswered.
    pub value: u8,
    pub max_value: u8,
}

impl FactorScore {
    /// Bar length as a rounded percentage of `max_value`.
    pub fn percent(&self) -> u8 {
        let max = u32::from(self.max_value.max(1));
        ((200 * u32::from(self.value) + max) / (2 * max)) as u8
    }

    /// Bar colour bucket: under 30% low, under 60% medium, else high.
    pub fn intensity(&self) -> SeverityLevel {
        let value = u32::from(self.value) * 10;
        let max = u32::from(self.max_value.max(1));
        if value < 3 * max {
            SeverityLevel::Low
        } else if value < 6 * max {
            SeverityLevel::Medium
        } else {
            SeverityLevel::High
        }
    }
}

/// Minimum factor value that counts as a key contributing factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SignificanceThreshold(pub u8);

impl Default for SignificanceThreshold {
    fn default() -> Self {
        Self(2)
    }
}

/// One entry per question, in question-set order.
pub fn project(set: &QuestionSet, answers: &AnswerMap) -> Vec<FactorScore> {
    set.questions()
        .iter()
        .map(|q| FactorScore {
            factor_name: q.factor_name.clone(),
            value: answers.get(q.id).unwrap_or(0),
            max_value: set.max_option_score(),
        })
        .collect()
}

/// Names of factors whose value reaches `threshold`, in breakdown order.
pub fn significant_factors(factors: &[FactorScore], threshold: SignificanceThreshold) -> Vec<&str> {
    factors
        .iter()
        .filter(|f| f.value >= threshold.0)
        .map(|f| f.factor_name.as_str())
        .collect()
}
