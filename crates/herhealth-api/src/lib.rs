//! herhealth-api
//!
//! HTTP surface over the assessment engine for the web client.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use herhealth_instruments::load_engines;
use herhealth_storage::files::FileSink;
use herhealth_storage::memory::MemorySink;
use herhealth_storage::sink::AssessmentSink;

use config::ApiConfig;
use state::AppState;

/// Load every scoring engine and pick the sink. Malformed instrument data
/// fails here, before the server accepts a request.
pub fn build_state(config: &ApiConfig) -> eyre::Result<AppState> {
    let engines = load_engines()?
        .into_iter()
        .map(|engine| (engine.assessment_type(), Arc::new(engine)))
        .collect();

    let sink: Arc<dyn AssessmentSink> = match &config.data_dir {
        Some(dir) => {
            tracing::info!(data_dir = %dir.display(), "persisting assessments to files");
            Arc::new(FileSink::new(dir))
        }
        None => {
            tracing::info!("no data dir configured, keeping assessments in memory");
            Arc::new(MemorySink::new())
        }
    };

    Ok(AppState {
        engines: Arc::new(engines),
        sink,
        significance_threshold: config.significance_threshold,
    })
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/instruments", get(routes::instruments::list_instruments))
        .route("/instruments/{id}", get(routes::instruments::get_instrument_detail))
        .route("/instruments/{id}/preview", post(routes::instruments::preview))
        .route("/assessments", get(routes::assessments::list_assessments))
        .route("/assessments", post(routes::assessments::submit_assessment))
        .route(
            "/recommendations/{assessment_type}/{level}",
            get(routes::recommendations::get_recommendation),
        )
        .layer(axum_mw::from_fn(middleware::session::current_user))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
