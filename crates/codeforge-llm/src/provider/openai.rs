//! OpenAI-compatible chat-completions provider

use crate::client::{CompletionClient, CompletionRequest, CompletionResponse};
use crate::error::{LLMError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// Default endpoint for the OpenAI API
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default upper bound for one completion round trip
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Environment variable holding the API credential
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// OpenAI chat-completions provider.
///
/// Works against any service exposing `POST {base_url}/chat/completions`
/// with the OpenAI request and response shapes.
pub struct OpenAIProvider {
    api_key: String,
    base_url: String,
    timeout: Duration,
    client: Client,
}

impl OpenAIProvider {
    /// Create a provider against the public OpenAI endpoint
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_options(api_key, DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Create with a custom base URL (e.g., Azure OpenAI or a local gateway)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        Self::with_options(api_key, base_url, DEFAULT_TIMEOUT)
    }

    /// Create with a custom base URL and request timeout
    pub fn with_options(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LLMError::InvalidConfiguration(format!(
                "{} must not be empty",
                API_KEY_ENV
            )));
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
            client,
        })
    }

    /// Create from `OPENAI_API_KEY`, failing when the variable is absent
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_options(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Like [`from_env`](Self::from_env) with a custom base URL and timeout
    pub fn from_env_with_options(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let api_key = require_api_key(std::env::var(API_KEY_ENV).ok())?;
        Self::with_options(api_key, base_url, timeout)
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Configured request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn request_body(request: &CompletionRequest) -> serde_json::Value {
        let mut messages = Vec::new();

        if let Some(system) = &request.system {
            messages.push(json!({
                "role": "system",
                "content": system
            }));
        }

        messages.push(json!({
            "role": "user",
            "content": request.prompt
        }));

        let mut body = json!({
            "model": request.model,
            "messages": messages,
        });

        if let Some(max_tokens) = request.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }
        if let Some(temperature) = request.temperature {
            body["temperature"] = json!(temperature);
        }

        body
    }

    fn map_transport_error(&self, err: reqwest::Error) -> LLMError {
        if err.is_timeout() {
            LLMError::Timeout(self.timeout.as_secs())
        } else {
            LLMError::ApiCallFailed(format!("OpenAI API call failed: {}", err))
        }
    }
}

fn require_api_key(value: Option<String>) -> Result<String> {
    value.ok_or_else(|| {
        LLMError::InvalidConfiguration(format!(
            "Missing {}. Create a .env file or set the env var.",
            API_KEY_ENV
        ))
    })
}

#[async_trait]
impl CompletionClient for OpenAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let body = Self::request_body(&request);

        debug!(model = %request.model, prompt_len = request.prompt.len(), "sending completion request");

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = resp.status();
        let resp_text = resp.text().await.map_err(|e| self.map_transport_error(e))?;

        if !status.is_success() {
            return Err(LLMError::ApiCallFailed(format!(
                "OpenAI API error ({}): {}",
                status, resp_text
            )));
        }

        let resp_json: serde_json::Value = serde_json::from_str(&resp_text).map_err(|e| {
            LLMError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        let message = &resp_json["choices"][0]["message"];
        if !message.is_object() {
            return Err(LLMError::InvalidResponse(
                "No message in response".to_string(),
            ));
        }

        // A null content (e.g. a refusal) is treated as empty text
        let content = message["content"].as_str().unwrap_or_default().to_string();

        let finish_reason = resp_json["choices"][0]["finish_reason"]
            .as_str()
            .unwrap_or("stop")
            .to_string();

        let tokens_used = resp_json["usage"]["total_tokens"].as_u64().unwrap_or(0) as u32;

        let model = resp_json["model"]
            .as_str()
            .map(str::to_string)
            .unwrap_or(request.model);

        debug!(%model, tokens_used, %finish_reason, "completion received");

        Ok(CompletionResponse::new(content, model)
            .with_tokens(tokens_used)
            .with_finish_reason(finish_reason))
    }

    fn name(&self) -> &str {
        "openai"
    }
}
