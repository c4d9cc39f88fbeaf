//! Completion client interface and types

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Request for a single chat completion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// The user prompt
    pub prompt: String,

    /// Model identifier (e.g., "gpt-4o-mini")
    pub model: String,

    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,

    /// Sampling temperature (0.0 - 2.0, lower = more deterministic)
    pub temperature: Option<f32>,

    /// System instruction sent ahead of the prompt
    pub system: Option<String>,
}

impl CompletionRequest {
    /// Create a new completion request
    pub fn new(prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            max_tokens: None,
            temperature: None,
            system: None,
        }
    }

    /// Set max tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set system instruction
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}

/// Raw completion returned by the remote model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Free-form text produced by the model
    pub content: String,

    /// Model that produced the text
    pub model: String,

    /// Number of tokens used
    pub tokens_used: u32,

    /// Finish reason (e.g., "stop", "length")
    pub finish_reason: String,
}

impl CompletionResponse {
    /// Create a new completion response
    pub fn new(content: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            model: model.into(),
            tokens_used: 0,
            finish_reason: "stop".to_string(),
        }
    }

    /// Set tokens used
    pub fn with_tokens(mut self, tokens: u32) -> Self {
        self.tokens_used = tokens;
        self
    }

    /// Set finish reason
    pub fn with_finish_reason(mut self, reason: impl Into<String>) -> Self {
        self.finish_reason = reason.into();
        self
    }
}

/// A chat-completion service: one prompt in, raw text out.
///
/// Implementations make exactly one remote call per invocation. They do not
/// retry and do not cache.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send the request and return the model's raw response
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;

    /// Short name of this client, used in logs
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_request_builder() {
        let request = CompletionRequest::new("Write a parser", "gpt-4o-mini")
            .with_max_tokens(512)
            .with_temperature(0.3)
            .with_system("You are precise");

        assert_eq!(request.prompt, "Write a parser");
        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.max_tokens, Some(512));
        assert_eq!(request.temperature, Some(0.3));
        assert_eq!(request.system.as_deref(), Some("You are precise"));
    }

    #[test]
    fn test_completion_request_defaults() {
        let request = CompletionRequest::new("p", "m");
        assert!(request.max_tokens.is_none());
        assert!(request.temperature.is_none());
        assert!(request.system.is_none());
    }

    #[test]
    fn test_completion_response_builder() {
        let response = CompletionResponse::new("```java\nclass A {}\n```", "gpt-4o-mini")
            .with_tokens(42)
            .with_finish_reason("length");

        assert!(response.content.starts_with("```java"));
        assert_eq!(response.model, "gpt-4o-mini");
        assert_eq!(response.tokens_used, 42);
        assert_eq!(response.finish_reason, "length");
    }
}
