use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use herhealth_core::models::assessment::SeverityLevel;
use herhealth_core::models::recommendation::{LifestyleTip, Recommendation};
use herhealth_instruments::recommendations::{lifestyle_tips, recommendation};

use super::parse_assessment_type;
use crate::error::ApiError;

#[derive(Serialize)]
pub struct RecommendationResponse {
    recommendation: Recommendation,
    lifestyle_tips: Vec<LifestyleTip>,
}

pub async fn get_recommendation(
    Path((assessment_type, level)): Path<(String, String)>,
) -> Result<Json<RecommendationResponse>, ApiError> {
    let assessment_type = parse_assessment_type(&assessment_type)?;
    let level: SeverityLevel = level.parse()?;

    Ok(Json(RecommendationResponse {
        recommendation: recommendation(level, assessment_type),
        lifestyle_tips: lifestyle_tips(),
    }))
}
