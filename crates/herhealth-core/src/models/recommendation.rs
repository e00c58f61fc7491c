use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Diet and exercise guidance shown after an assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub foods_to_eat: Vec<String>,
    pub foods_to_avoid: Vec<String>,
    pub sample_meal: String,
    pub exercise_items: Vec<String>,
}

/// A general lifestyle tip, shown regardless of assessment or severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LifestyleTip {
    pub title: String,
    pub detail: String,
}
