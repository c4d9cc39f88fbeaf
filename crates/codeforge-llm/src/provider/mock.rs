//! Mock completion provider for testing

use crate::client::{CompletionClient, CompletionRequest, CompletionResponse};
use crate::error::{LLMError, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

/// Mock provider that replays scripted responses and records every request.
///
/// Scripted responses are served in order; once the script is exhausted the
/// default response is returned for every further call.
pub struct MockProvider {
    default_response: String,
    scripted: Mutex<VecDeque<String>>,
    failure: Option<String>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockProvider {
    /// Create a new mock provider
    pub fn new() -> Self {
        Self {
            default_response: "Mock completion response".to_string(),
            scripted: Mutex::new(VecDeque::new()),
            failure: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create with a fixed response for every call
    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            ..Self::new()
        }
    }

    /// Create with responses served one per call, in order
    pub fn with_responses<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            scripted: Mutex::new(responses.into_iter().map(Into::into).collect()),
            ..Self::new()
        }
    }

    /// Create a provider whose every call fails like an unreachable API
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::new()
        }
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<CompletionRequest> {
        lock(&self.requests).clone()
    }

    /// Number of calls received so far
    pub fn call_count(&self) -> usize {
        lock(&self.requests).len()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl CompletionClient for MockProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let model = request.model.clone();
        lock(&self.requests).push(request);

        if let Some(message) = &self.failure {
            return Err(LLMError::ApiCallFailed(message.clone()));
        }

        let content = lock(&self.scripted)
            .pop_front()
            .unwrap_or_else(|| self.default_response.clone());

        Ok(CompletionResponse::new(content, model)
            .with_tokens(10)
            .with_finish_reason("stop"))
    }

    fn name(&self) -> &str {
        "mock"
    }
}
