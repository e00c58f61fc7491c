use std::fmt;

use serde::{Deserialize, Serialize};

/// Screens of an assessment run, in the only order they can be visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Education,
    Questionnaire,
    Results,
    Recommendations,
    Doctors,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::Education,
        Step::Questionnaire,
        Step::Results,
        Step::Recommendations,
        Step::Doctors,
    ];

    /// Zero-based position, for progress indicators.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Education => "education",
            Step::Questionnaire => "questionnaire",
            Step::Results => "results",
            Step::Recommendations => "recommendations",
            Step::Doctors => "doctors",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
