//! Core error types

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// A required input was empty
    #[error("{0}")]
    MissingInput(String),

    /// Language key absent from the profile table
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Profiles file could not be applied
    #[error("Invalid language profiles: {0}")]
    ProfileConfig(String),

    /// YAML error while reading a profiles file
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Whether this error is a caller-input problem the UI can show as a banner
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CoreError::MissingInput(_) | CoreError::UnsupportedLanguage(_)
        )
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
