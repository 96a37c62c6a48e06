use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use snapshot_api::config::Config;
use snapshot_api::llm_client::LlmClient;
use snapshot_api::routes::build_router;
use snapshot_api::snapshot::prompts::snapshot_completion_config;
use snapshot_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Snapshot API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client. A missing API key is NOT fatal at startup:
    // snapshot requests are rejected with a configuration error instead.
    let mut llm = LlmClient::new(config.openai_api_key.clone());
    if let Some(base_url) = &config.llm_base_url {
        llm = llm.with_base_url(base_url.clone());
    }
    if !llm.has_credential() {
        warn!("OPENAI_API_KEY is not set; snapshot requests will fail");
    }

    // Fixed per-request generation parameters for snapshot sections
    let completion = snapshot_completion_config();
    info!(
        "LLM client initialized (model: {}, temperature: {})",
        completion.model, completion.temperature
    );

    // Build app state
    let state = AppState {
        llm,
        completion,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
