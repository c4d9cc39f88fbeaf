//! Router creation and configuration

use super::handlers::*;
use super::types::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create REST API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/languages", get(languages))
        .route("/v1/generate/code", post(generate_code))
        .route("/v1/generate/tests", post(generate_tests))
        .route("/v1/generate/docs", post(generate_docs))
        .route("/v1/artifacts/:name", get(download_artifact))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
