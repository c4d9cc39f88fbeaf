//! Tests for REST API components

#![cfg(test)]

use super::types::*;
use axum::http::StatusCode;
use codeforge_sdk::{Artifact, ArtifactKind, GenerationOutcome};
use std::path::PathBuf;

#[test]
fn test_code_payload_defaults_missing_fields() {
    let payload: GenerateCodePayload = serde_json::from_str(r#"{"language": "java"}"#).unwrap();
    assert_eq!(payload.requirements, "");
    assert_eq!(payload.language, "java");

    let payload: GenerateFromCodePayload = serde_json::from_str("{}").unwrap();
    assert_eq!(payload.code, "");
    assert_eq!(payload.language, "");
}

#[test]
fn test_response_from_ready_outcome() {
    let artifact = Artifact::new(ArtifactKind::Code, "print(1)", "python")
        .with_path(PathBuf::from("/tmp/main-20260314-092653.py"));
    let outcome = GenerationOutcome::Ready(artifact);

    let response = GenerationResponse::from(&outcome);

    assert_eq!(response.view.as_deref(), Some("```python\nprint(1)\n```"));
    assert_eq!(response.file.as_deref(), Some("main-20260314-092653.py"));
    assert!(response.error.is_none());
    assert_eq!(GenerationResponse::status_for(&outcome), StatusCode::OK);
}

#[test]
fn test_response_from_rejected_outcome() {
    let outcome = GenerationOutcome::Rejected {
        kind: ArtifactKind::Tests,
        message: "Unsupported language: rust".to_string(),
    };

    let response = GenerationResponse::from(&outcome);

    assert!(response.view.is_none());
    assert!(response.file.is_none());
    assert_eq!(response.error.as_deref(), Some("Unsupported language: rust"));
    assert_eq!(
        GenerationResponse::status_for(&outcome),
        StatusCode::BAD_REQUEST
    );
}

#[test]
fn test_response_serializes_nulls() {
    let response = GenerationResponse {
        view: None,
        file: None,
        error: Some("Please enter requirements and choose a language.".to_string()),
    };

    let json = serde_json::to_value(&response).unwrap();
    assert!(json["view"].is_null());
    assert!(json["file"].is_null());
    assert_eq!(
        json["error"],
        "Please enter requirements and choose a language."
    );
}

#[test]
fn test_health_response_serialization() {
    let health = HealthResponse {
        status: "healthy".to_string(),
        version: "0.1.0".to_string(),
    };

    let json = serde_json::to_string(&health).unwrap();
    assert!(json.contains("\"status\":\"healthy\""));
    assert!(json.contains("\"version\":\"0.1.0\""));
}

#[test]
fn test_attachment_disposition_quotes_name() {
    use super::handlers::attachment_disposition;

    assert_eq!(
        attachment_disposition("TinyUrl-20260314-092653.java"),
        "attachment; filename=\"TinyUrl-20260314-092653.java\""
    );
    assert_eq!(
        attachment_disposition("a\"b\\c-20260314-092653.txt"),
        "attachment; filename=\"a\\\"b\\\\c-20260314-092653.txt\""
    );
    assert_eq!(
        attachment_disposition("x\r\ny-20260314-092653.txt"),
        "attachment; filename=\"x__y-20260314-092653.txt\""
    );
}
