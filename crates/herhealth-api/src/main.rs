use tracing_subscriber::EnvFilter;

use herhealth_api::config::ApiConfig;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ApiConfig::from_env()?;
    let state = herhealth_api::build_state(&config)?;
    let app = herhealth_api::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(addr = %config.bind, "assessment api listening");
    axum::serve(listener, app).await?;
    Ok(())
}
