use std::collections::BTreeMap;
use std::sync::Arc;

use herhealth_core::models::assessment::AssessmentType;
use herhealth_instruments::breakdown::SignificanceThreshold;
use herhealth_instruments::engine::ScoringEngine;
use herhealth_storage::sink::AssessmentSink;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub engines: Arc<BTreeMap<AssessmentType, Arc<ScoringEngine>>>,
    pub sink: Arc<dyn AssessmentSink>,
    pub significance_threshold: SignificanceThreshold,
}

impl AppState {
    pub fn engine(&self, assessment_type: AssessmentType) -> Option<Arc<ScoringEngine>> {
        self.engines.get(&assessment_type).cloned()
    }
}
