//! CodeForge SDK
//!
//! High-level API for generating a source file, its unit tests and its
//! README from natural-language requirements.

pub mod builder;
pub mod config;
pub mod error;
pub mod pipeline;

pub use builder::PipelineBuilder;
pub use config::{PipelineConfig, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
pub use error::{Result, SdkError};
pub use pipeline::{
    GenerationOutcome, GenerationPipeline, MISSING_CODE_MESSAGE, MISSING_REQUIREMENTS_MESSAGE,
};

// Re-export commonly used types from dependencies
pub use codeforge_core::{Artifact, ArtifactKind, ArtifactWriter, LanguageProfile, ProfileTable};
pub use codeforge_llm::{CompletionClient, LLMError, MockProvider, OpenAIProvider};
