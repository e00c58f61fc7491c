use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid assessment type: {0}")]
    InvalidAssessmentType(String),

    #[error("invalid severity level: {0}")]
    InvalidSeverityLevel(String),

    #[error("invalid user id: {0:?}")]
    InvalidUserId(String),
}
