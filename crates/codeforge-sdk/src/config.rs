//! Configuration types for the generation pipeline

use codeforge_core::SYSTEM_INSTRUCTION;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default model identity
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Model used for every completion
    pub model: String,

    /// Sampling temperature
    pub temperature: Option<f32>,

    /// Maximum tokens per completion
    pub max_tokens: Option<u32>,

    /// System instruction sent with every prompt
    pub system: String,

    /// Directory artifacts are written to (`codeforge/` under the OS temp dir when unset)
    pub output_dir: Option<PathBuf>,
}

impl PipelineConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: Some(DEFAULT_TEMPERATURE),
            max_tokens: None,
            system: SYSTEM_INSTRUCTION.to_string(),
            output_dir: None,
        }
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set maximum tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the system instruction
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = system.into();
        self
    }

    /// Set the artifact directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new()
    }
}
