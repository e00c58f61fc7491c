use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// Which self-assessment a question set, band table or stored record
/// belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentType {
    Pcos,
    Menstrual,
    Menopause,
}

impl AssessmentType {
    pub const ALL: [AssessmentType; 3] = [
        AssessmentType::Pcos,
        AssessmentType::Menstrual,
        AssessmentType::Menopause,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentType::Pcos => "pcos",
            AssessmentType::Menstrual => "menstrual",
            AssessmentType::Menopause => "menopause",
        }
    }
}

impl fmt::Display for AssessmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssessmentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pcos" => Ok(AssessmentType::Pcos),
            "menstrual" => Ok(AssessmentType::Menstrual),
            "menopause" => Ok(AssessmentType::Menopause),
            other => Err(CoreError::InvalidAssessmentType(other.to_string())),
        }
    }
}

/// Coarse three-level classification. Selects recommendation content and is
/// what gets persisted as `risk_category`; the finer, user-facing label lives
/// on the band that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityLevel {
    Low,
    Medium,
    High,
}

impl SeverityLevel {
    pub const ALL: [SeverityLevel; 3] = [SeverityLevel::Low, SeverityLevel::Medium, SeverityLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityLevel::Low => "low",
            SeverityLevel::Medium => "medium",
            SeverityLevel::High => "high",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeverityLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(SeverityLevel::Low),
            "medium" => Ok(SeverityLevel::Medium),
            "high" => Ok(SeverityLevel::High),
            other => Err(CoreError::InvalidSeverityLevel(other.to_string())),
        }
    }
}

/// One completed assessment as handed to the persistence backend.
///
/// Field names match the `health_assessments` table. `responses` holds the
/// raw answer map with question ids rendered as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub user_id: String,
    pub assessment_type: AssessmentType,
    pub risk_score: u8,
    pub risk_category: SeverityLevel,
    pub responses: BTreeMap<String, u8>,
    pub created_at: jiff::Timestamp,
}

impl AssessmentRecord {
    pub fn new(
        user_id: impl Into<String>,
        assessment_type: AssessmentType,
        risk_score: u8,
        risk_category: SeverityLevel,
        responses: BTreeMap<String, u8>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            assessment_type,
            risk_score,
            risk_category,
            responses,
            created_at: jiff::Timestamp::now(),
        }
    }
}
