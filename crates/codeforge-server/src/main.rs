//! CodeForge HTTP Server
//!
//! Serves the code, tests and docs generators over REST.

use anyhow::Result;
use codeforge_server::api::{self, AppState};
use codeforge_server::config::ServerConfig;
use codeforge_server::pipeline;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Initialize tracing
    init_tracing(&config)?;
    info!("Loaded configuration: {:?}", config);

    // Initialize generation pipeline
    let pipeline = pipeline::init_pipeline(&config)?;
    info!("Generation pipeline initialized");

    let state = AppState::new(Arc::new(pipeline), config.default_language.clone());
    let app = api::create_router(state);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("✓ Server listening on http://{}", addr);
    info!("  Health check: http://{}/health", addr);
    info!("  Languages: http://{}/v1/languages", addr);
    info!("  Generate: POST http://{}/v1/generate/{{code,tests,docs}}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(config: &ServerConfig) -> Result<()> {
    let level = &config.log_level;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "codeforge_server={level},codeforge_sdk={level},codeforge_llm={level},codeforge_core={level},tower_http=debug"
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
