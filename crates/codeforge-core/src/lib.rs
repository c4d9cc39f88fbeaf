//! CodeForge core
//!
//! The parts of the generation pipeline that do not talk to the network:
//! - [`profile`]: language profile table
//! - [`prompt`]: code, tests and docs prompt builders
//! - [`extractor`]: fenced-block extraction and rendering
//! - [`artifact`]: artifact value object and timestamped file writer

pub mod artifact;
pub mod error;
pub mod extractor;
pub mod profile;
pub mod prompt;

pub use artifact::{artifact_file_name, is_plain_file_name, Artifact, ArtifactKind, ArtifactWriter};
pub use error::{CoreError, Result};
pub use extractor::{
    extract_fenced, extract_with_tier, unwrap_rendered, wrap_as_markdown, ExtractionTier, FENCE,
    MARKDOWN_TAG,
};
pub use profile::{LanguageProfile, ProfileTable};
pub use prompt::{PromptBuilder, SYSTEM_INSTRUCTION};
