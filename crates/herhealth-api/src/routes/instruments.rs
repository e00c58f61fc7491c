use std::collections::BTreeMap;

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use herhealth_instruments::bands::Band;
use herhealth_instruments::breakdown::FactorScore;
use herhealth_instruments::engine::Estimate;
use herhealth_instruments::scoring::{AnswerMap, Question};

use super::parse_assessment_type;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    name: String,
    question_count: usize,
}

#[derive(Serialize)]
pub struct InstrumentDetail {
    id: String,
    name: String,
    max_option_score: u8,
    questions: Vec<Question>,
    bands: Vec<Band>,
}

#[derive(Deserialize)]
pub struct PreviewRequest {
    #[serde(default)]
    answers: BTreeMap<u32, u8>,
}

#[derive(Serialize)]
pub struct PreviewResponse {
    estimate: Estimate,
    factors: Vec<FactorScore>,
    key_factors: String,
}

pub async fn list_instruments(State(state): State<AppState>) -> Json<Vec<InstrumentSummary>> {
    let instruments = state
        .engines
        .values()
        .map(|engine| InstrumentSummary {
            id: engine.assessment_type().to_string(),
            name: engine.name().to_string(),
            question_count: engine.questions().len(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let engine = state
        .engine(parse_assessment_type(&id)?)
        .ok_or_else(|| ApiError::NotFound(format!("instrument not found: {id}")))?;

    Ok(Json(InstrumentDetail {
        id: engine.assessment_type().to_string(),
        name: engine.name().to_string(),
        max_option_score: engine.questions().max_option_score(),
        questions: engine.questions().questions().to_vec(),
        bands: engine.bands().bands().to_vec(),
    }))
}

/// Live estimate for an in-progress questionnaire. Nothing is stored.
pub async fn preview(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<PreviewRequest>,
) -> Result<Json<PreviewResponse>, ApiError> {
    let engine = state
        .engine(parse_assessment_type(&id)?)
        .ok_or_else(|| ApiError::NotFound(format!("instrument not found: {id}")))?;

    let answers = AnswerMap::from_entries(engine.questions(), body.answers)?;
    let factors = engine.breakdown(&answers);
    let key_factors = engine.key_factor_summary(&factors, state.significance_threshold);

    Ok(Json(PreviewResponse {
        estimate: engine.estimate(&answers),
        factors,
        key_factors,
    }))
}
