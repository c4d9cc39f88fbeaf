//! REST API type definitions
//!
//! Request and response types for the REST API endpoints.

use axum::http::StatusCode;
use codeforge_sdk::{GenerationOutcome, GenerationPipeline};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<GenerationPipeline>,
    pub default_language: String,
}

impl AppState {
    pub fn new(pipeline: Arc<GenerationPipeline>, default_language: impl Into<String>) -> Self {
        Self {
            pipeline,
            default_language: default_language.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Languages for the dropdown
#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    /// Supported languages, sorted
    pub languages: Vec<String>,
    pub default_language: String,
}

/// Generate-code request; missing fields count as empty
#[derive(Debug, Default, Deserialize)]
pub struct GenerateCodePayload {
    #[serde(default)]
    pub requirements: String,

    #[serde(default)]
    pub language: String,
}

/// Generate-tests / generate-docs request
#[derive(Debug, Default, Deserialize)]
pub struct GenerateFromCodePayload {
    /// Current code view, fenced or pasted as-is
    #[serde(default)]
    pub code: String,

    #[serde(default)]
    pub language: String,
}

/// `{view, file, error}` answer shared by the three generators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Fenced markdown to display; null keeps the current view
    pub view: Option<String>,

    /// Download name under `/v1/artifacts/`
    pub file: Option<String>,

    /// Banner text; null clears the banner
    pub error: Option<String>,
}

impl GenerationResponse {
    /// HTTP status for an outcome: 200 when ready, 400 when rejected
    pub fn status_for(outcome: &GenerationOutcome) -> StatusCode {
        if outcome.is_ready() {
            StatusCode::OK
        } else {
            StatusCode::BAD_REQUEST
        }
    }
}

impl From<&GenerationOutcome> for GenerationResponse {
    fn from(outcome: &GenerationOutcome) -> Self {
        Self {
            view: outcome.view(),
            file: outcome
                .artifact()
                .and_then(|artifact| artifact.file_name())
                .map(str::to_string),
            error: outcome.error_message().map(str::to_string),
        }
    }
}
