//! SDK error types

use codeforge_core::CoreError;
use codeforge_llm::LLMError;
use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Core error (profiles, artifact writes)
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Completion call failed
    #[error("Completion failed: {0}")]
    Llm(#[from] LLMError),
}

impl SdkError {
    /// Whether the failure came from the remote completion service
    pub fn is_remote(&self) -> bool {
        matches!(self, SdkError::Llm(e) if e.is_remote())
    }
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
