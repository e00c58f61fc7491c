pub mod assessments;
pub mod health;
pub mod instruments;
pub mod recommendations;

use herhealth_core::models::assessment::AssessmentType;

use crate::error::ApiError;

fn parse_assessment_type(id: &str) -> Result<AssessmentType, ApiError> {
    id.parse()
        .map_err(|_| ApiError::NotFound(format!("instrument not found: {id}")))
}
