//! API endpoint handlers
//!
//! HTTP request handlers for all REST API endpoints.

use super::extractors::JsonExtractor;
use super::types::*;
use crate::error::ServerError;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use codeforge_core::is_plain_file_name;
use codeforge_sdk::{GenerationOutcome, SdkError};
use std::io::ErrorKind;
use tracing::{error, info};

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Supported languages endpoint
pub(super) async fn languages(State(state): State<AppState>) -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        languages: state
            .pipeline
            .profiles()
            .languages()
            .map(str::to_string)
            .collect(),
        default_language: state.default_language.clone(),
    })
}

/// Generate-code endpoint
#[axum::debug_handler]
pub(super) async fn generate_code(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<GenerateCodePayload>,
) -> Result<(StatusCode, Json<GenerationResponse>), ServerError> {
    info!(
        "Received generate-code request: language={}, {} chars of requirements",
        payload.language,
        payload.requirements.len()
    );

    let outcome = state
        .pipeline
        .generate_code(&payload.requirements, &payload.language)
        .await;

    respond(outcome)
}

/// Generate-tests endpoint
pub(super) async fn generate_tests(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<GenerateFromCodePayload>,
) -> Result<(StatusCode, Json<GenerationResponse>), ServerError> {
    info!(
        "Received generate-tests request: language={}, {} chars of code",
        payload.language,
        payload.code.len()
    );

    let outcome = state
        .pipeline
        .generate_tests(&payload.code, &payload.language)
        .await;

    respond(outcome)
}

/// Generate-docs endpoint
pub(super) async fn generate_docs(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<GenerateFromCodePayload>,
) -> Result<(StatusCode, Json<GenerationResponse>), ServerError> {
    info!(
        "Received generate-docs request: language={}, {} chars of code",
        payload.language,
        payload.code.len()
    );

    let outcome = state
        .pipeline
        .generate_docs(&payload.code, &payload.language)
        .await;

    respond(outcome)
}

/// Artifact download endpoint
///
/// Serves only files this process generated.
pub(super) async fn download_artifact(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, ServerError> {
    if !is_plain_file_name(&name) {
        return Err(ServerError::InvalidRequest(format!(
            "Invalid artifact name: {}",
            name
        )));
    }

    let path = state
        .pipeline
        .writer()
        .resolve(&name)
        .ok_or_else(|| ServerError::NotFound(format!("Artifact {} not found", name)))?;

    let content = match tokio::fs::read(&path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ServerError::NotFound(format!("Artifact {} not found", name)));
        }
        Err(e) => {
            error!("Failed to read artifact {}: {}", path.display(), e);
            return Err(ServerError::InternalError(e.to_string()));
        }
    };

    let headers = [
        (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
        (header::CONTENT_DISPOSITION, attachment_disposition(&name)),
    ];

    Ok((headers, content).into_response())
}

/// `attachment` disposition with the name as a quoted string
pub(super) fn attachment_disposition(name: &str) -> String {
    let mut quoted = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '"' | '\\' => {
                quoted.push('\\');
                quoted.push(c);
            }
            c if c.is_control() => quoted.push('_'),
            c => quoted.push(c),
        }
    }
    format!("attachment; filename=\"{}\"", quoted)
}

fn respond(
    outcome: Result<GenerationOutcome, SdkError>,
) -> Result<(StatusCode, Json<GenerationResponse>), ServerError> {
    match outcome {
        Ok(outcome) => Ok((
            GenerationResponse::status_for(&outcome),
            Json(GenerationResponse::from(&outcome)),
        )),
        Err(e) => {
            error!("Generation failed: {}", e);
            Err(e.into())
        }
    }
}
