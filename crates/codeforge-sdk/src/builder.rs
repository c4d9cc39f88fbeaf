//! Builder pattern for GenerationPipeline

use crate::config::PipelineConfig;
use crate::error::{Result, SdkError};
use crate::pipeline::GenerationPipeline;
use codeforge_core::ProfileTable;
use codeforge_llm::CompletionClient;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Builder for GenerationPipeline
///
/// # Example
///
/// ```rust,ignore
/// use codeforge_sdk::PipelineBuilder;
/// use codeforge_llm::OpenAIProvider;
/// use std::sync::Arc;
///
/// let pipeline = PipelineBuilder::new()
///     .with_client(Arc::new(OpenAIProvider::from_env()?))
///     .with_profiles_file("config/languages.yaml")
///     .with_output_dir("/var/tmp/codeforge")
///     .build()?;
///
/// let outcome = pipeline.generate_code("a TinyURL class", "java").await?;
/// ```
pub struct PipelineBuilder {
    client: Option<Arc<dyn CompletionClient>>,
    profiles: Option<Arc<ProfileTable>>,
    profiles_file: Option<PathBuf>,
    config: PipelineConfig,
}

impl PipelineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            client: None,
            profiles: None,
            profiles_file: None,
            config: PipelineConfig::new(),
        }
    }

    /// Set the completion client (required)
    pub fn with_client(mut self, client: Arc<dyn CompletionClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Use an already built profile table
    pub fn with_profiles(mut self, profiles: Arc<ProfileTable>) -> Self {
        self.profiles = Some(profiles);
        self
    }

    /// Layer a YAML profiles file over the built-in table at build time
    pub fn with_profiles_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.profiles_file = Some(path.into());
        self
    }

    /// Replace the whole pipeline configuration
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.config.temperature = Some(temperature);
        self
    }

    /// Set the artifact directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = Some(dir.into());
        self
    }

    /// Build the pipeline
    pub fn build(self) -> Result<GenerationPipeline> {
        let client = self
            .client
            .ok_or_else(|| SdkError::ConfigError("completion client not set".to_string()))?;

        if self.profiles.is_some() && self.profiles_file.is_some() {
            return Err(SdkError::ConfigError(
                "set either a profile table or a profiles file, not both".to_string(),
            ));
        }

        let profiles = match (self.profiles, self.profiles_file) {
            (Some(profiles), _) => profiles,
            (None, Some(path)) => Arc::new(ProfileTable::with_overrides_from_file(path)?),
            (None, None) => Arc::new(ProfileTable::builtin()),
        };

        info!(
            client = client.name(),
            model = %self.config.model,
            languages = profiles.len(),
            "Generation pipeline ready"
        );

        Ok(GenerationPipeline::new(client, profiles, self.config))
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codeforge_llm::MockProvider;
    use std::io::Write;

    #[test]
    fn test_build_requires_client() {
        let result = PipelineBuilder::new().build();
        assert!(matches!(result, Err(SdkError::ConfigError(_))));
    }

    #[test]
    fn test_build_with_defaults() {
        let pipeline = PipelineBuilder::new()
            .with_client(Arc::new(MockProvider::new()))
            .build()
            .unwrap();

        assert_eq!(pipeline.profiles().len(), 3);
        assert_eq!(pipeline.config().model, "gpt-4o-mini");
        assert_eq!(pipeline.writer().output_dir(), std::env::temp_dir().join("codeforge"));
    }

    #[test]
    fn test_build_with_overrides() {
        let pipeline = PipelineBuilder::new()
            .with_client(Arc::new(MockProvider::new()))
            .with_model("gpt-4o")
            .with_temperature(0.1)
            .with_output_dir("/tmp/codeforge-test")
            .build()
            .unwrap();

        assert_eq!(pipeline.config().model, "gpt-4o");
        assert_eq!(pipeline.config().temperature, Some(0.1));
        assert_eq!(
            pipeline.writer().output_dir(),
            std::path::Path::new("/tmp/codeforge-test")
        );
    }

    #[test]
    fn test_build_with_profiles_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "go:\n  fence_tag: go\n  file_ext: go\n  test_framework: testing\n  test_hint: Use table tests.\n  run_hint: go run .\n  doc_hint: Mention go version.\n  example_filename: main.go\n  example_test_filename: main_test.go"
        )
        .unwrap();

        let pipeline = PipelineBuilder::new()
            .with_client(Arc::new(MockProvider::new()))
            .with_profiles_file(file.path())
            .build()
            .unwrap();

        assert!(pipeline.profiles().contains("go"));
        assert!(pipeline.profiles().contains("java"));
    }

    #[test]
    fn test_build_with_bad_profiles_file() {
        let result = PipelineBuilder::new()
            .with_client(Arc::new(MockProvider::new()))
            .with_profiles_file("/nonexistent/languages.yaml")
            .build();

        assert!(matches!(result, Err(SdkError::Core(_))));
    }

    #[test]
    fn test_build_rejects_table_and_file() {
        let result = PipelineBuilder::new()
            .with_client(Arc::new(MockProvider::new()))
            .with_profiles(Arc::new(ProfileTable::builtin()))
            .with_profiles_file("languages.yaml")
            .build();

        assert!(matches!(result, Err(SdkError::ConfigError(_))));
    }
}
