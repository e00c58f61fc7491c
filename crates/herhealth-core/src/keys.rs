//! Storage key/path conventions.
//!
//! Pure string functions with no backend dependency. These define the canonical
//! layout of assessment records in any key/value-shaped store.

use uuid::Uuid;

use crate::error::CoreError;
use crate::models::assessment::AssessmentType;

pub const ASSESSMENTS_PREFIX: &str = "health_assessments/";

/// User ids arrive from the session layer and become a single key segment.
/// Anything that could split or climb out of that segment is rejected.
pub fn check_user_id(user_id: &str) -> Result<(), CoreError> {
    let unsafe_segment = user_id.is_empty()
        || user_id == "."
        || user_id == ".."
        || user_id.chars().any(|c| matches!(c, '/' | '\\' | '\0'));
    if unsafe_segment {
        return Err(CoreError::InvalidUserId(user_id.to_string()));
    }
    Ok(())
}

pub fn user_assessments_prefix(user_id: &str) -> Result<String, CoreError> {
    check_user_id(user_id)?;
    Ok(format!("{ASSESSMENTS_PREFIX}{user_id}/"))
}

pub fn assessment(
    user_id: &str,
    assessment_type: AssessmentType,
    id: Uuid,
) -> Result<String, CoreError> {
    check_user_id(user_id)?;
    Ok(format!("{ASSESSMENTS_PREFIX}{user_id}/{assessment_type}/{id}.json"))
}
