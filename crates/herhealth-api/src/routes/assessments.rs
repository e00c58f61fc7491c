use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::State;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use herhealth_core::models::assessment::{AssessmentRecord, AssessmentType};
use herhealth_core::models::recommendation::Recommendation;
use herhealth_flow::run::AssessmentRun;
use herhealth_flow::submit::Submitter;
use herhealth_instruments::engine::AssessmentResult;
use herhealth_instruments::error::InstrumentError;
use herhealth_instruments::scoring::AnswerMap;

use crate::error::ApiError;
use crate::middleware::session::CurrentUser;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SubmitRequest {
    assessment_type: AssessmentType,
    answers: BTreeMap<u32, u8>,
}

#[derive(Serialize)]
pub struct SubmitResponse {
    result: AssessmentResult,
    key_factors: String,
    recommendation: Recommendation,
    /// Whether a background save was started. Its outcome is not reported.
    persisting: bool,
}

/// Score a completed questionnaire.
///
/// The answers are replayed through an [`AssessmentRun`] in question order,
/// so completion triggers the same fire-and-forget save the web client gets.
/// The response does not wait for that save.
pub async fn submit_assessment(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(body): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let engine = state.engine(body.assessment_type).ok_or_else(|| {
        ApiError::NotFound(format!("instrument not found: {}", body.assessment_type))
    })?;

    let answers = AnswerMap::from_entries(engine.questions(), body.answers)?;
    if !answers.is_complete(engine.questions()) {
        return Err(InstrumentError::Incomplete {
            answered: answers.len(),
            total: engine.questions().len(),
        }
        .into());
    }

    let submitter = Submitter::new(Arc::clone(&state.sink), Arc::new(user));
    let mut run = AssessmentRun::new(Arc::clone(&engine), submitter);
    run.begin()?;
    for question in engine.questions().questions() {
        // Completeness was checked above.
        let score = answers.get(question.id).unwrap_or_default();
        run.answer(score)?;
    }

    let persisting = run.take_submission().is_some();
    let result = run
        .result()
        .cloned()
        .ok_or_else(|| ApiError::Internal("run finished without a result".to_string()))?;
    let recommendation = run
        .recommendation()
        .ok_or_else(|| ApiError::Internal("run finished without a result".to_string()))?;
    let key_factors = engine.key_factor_summary(&result.factors, state.significance_threshold);

    Ok(Json(SubmitResponse {
        result,
        key_factors,
        recommendation,
        persisting,
    }))
}

/// Stored assessments for the signed-in user.
pub async fn list_assessments(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<AssessmentRecord>>, ApiError> {
    let user_id = user
        .user_id
        .ok_or_else(|| ApiError::Unauthorized("sign in to view saved assessments".to_string()))?;

    let records = state.sink.list_for_user(&user_id).await?;
    Ok(Json(records))
}
