//! Error types for the completion clients

use thiserror::Error;

/// Result type alias for completion operations
pub type Result<T> = std::result::Result<T, LLMError>;

/// Completion client errors
#[derive(Debug, Error)]
pub enum LLMError {
    /// Remote API rejected or failed the call (auth, rate limit, 5xx, transport)
    #[error("External API call failed: {0}")]
    ApiCallFailed(String),

    /// The call did not complete within the configured timeout
    #[error("Completion request timed out after {0}s")]
    Timeout(u64),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// HTTP client error
    #[error("HTTP request error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Response body did not have the expected shape
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

impl LLMError {
    /// Whether the failure happened on the remote side of the call
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            LLMError::ApiCallFailed(_)
                | LLMError::Timeout(_)
                | LLMError::HttpError(_)
                | LLMError::InvalidResponse(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_call_failed_display() {
        let err = LLMError::ApiCallFailed("401 Unauthorized".to_string());
        assert_eq!(err.to_string(), "External API call failed: 401 Unauthorized");
        assert!(err.is_remote());
    }

    #[test]
    fn test_timeout_display() {
        let err = LLMError::Timeout(30);
        assert_eq!(err.to_string(), "Completion request timed out after 30s");
        assert!(err.is_remote());
    }

    #[test]
    fn test_configuration_error_is_local() {
        let err = LLMError::InvalidConfiguration("missing api key".to_string());
        assert!(err.to_string().contains("missing api key"));
        assert!(!err.is_remote());
    }

    #[test]
    fn test_serde_error_conversion() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: LLMError = serde_err.into();
        assert!(err.to_string().starts_with("Serialization error"));
    }
}
