//! Code, tests and docs generation callbacks
//!
//! Each callback is a two-state machine per tab: a request either passes its
//! guard and ends `Ready` with a freshly persisted artifact, or fails the
//! guard and ends `Rejected` with a banner message, leaving the tab's
//! previous artifact alone.
//!
//! Guard failures are ordinary outcomes. Completion and file-write failures
//! are not caught here and come back as `Err`.

use crate::config::PipelineConfig;
use crate::error::Result;
use codeforge_core::{
    extract_with_tier, unwrap_rendered, Artifact, ArtifactKind, ArtifactWriter, CoreError,
    ExtractionTier, LanguageProfile, ProfileTable, PromptBuilder, MARKDOWN_TAG,
};
use codeforge_llm::{CompletionClient, CompletionRequest};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Banner shown when generate-code is missing an input
pub const MISSING_REQUIREMENTS_MESSAGE: &str = "Please enter requirements and choose a language.";

/// Banner shown when generate-tests/docs runs without code
pub const MISSING_CODE_MESSAGE: &str = "Generate code first (or paste code) and choose a language.";

/// Result of one callback invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// A new artifact was generated and persisted
    Ready(Artifact),

    /// The request failed validation; nothing was generated
    Rejected {
        kind: ArtifactKind,
        message: String,
    },
}

impl GenerationOutcome {
    fn rejected(kind: ArtifactKind, error: CoreError) -> Self {
        warn!(%kind, "generation rejected: {}", error);
        GenerationOutcome::Rejected {
            kind,
            message: error.to_string(),
        }
    }

    /// Validation failures become `Rejected`; anything else is returned as an error
    fn reject_or_fail(kind: ArtifactKind, error: CoreError) -> Result<Self> {
        if error.is_validation() {
            Ok(Self::rejected(kind, error))
        } else {
            Err(error.into())
        }
    }

    /// Tab this outcome belongs to
    pub fn kind(&self) -> ArtifactKind {
        match self {
            GenerationOutcome::Ready(artifact) => artifact.kind(),
            GenerationOutcome::Rejected { kind, .. } => *kind,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, GenerationOutcome::Ready(_))
    }

    /// The generated artifact, when ready
    pub fn artifact(&self) -> Option<&Artifact> {
        match self {
            GenerationOutcome::Ready(artifact) => Some(artifact),
            GenerationOutcome::Rejected { .. } => None,
        }
    }

    /// Fenced markdown to display; `None` means keep the current view
    pub fn view(&self) -> Option<String> {
        self.artifact().map(Artifact::rendered)
    }

    /// Path of the persisted artifact
    pub fn file_path(&self) -> Option<&Path> {
        self.artifact().and_then(Artifact::path)
    }

    /// Banner text; `None` clears the banner
    pub fn error_message(&self) -> Option<&str> {
        match self {
            GenerationOutcome::Ready(_) => None,
            GenerationOutcome::Rejected { message, .. } => Some(message),
        }
    }
}

/// Prompt → complete → extract → persist, for code, tests and docs
pub struct GenerationPipeline {
    client: Arc<dyn CompletionClient>,
    prompts: PromptBuilder,
    writer: ArtifactWriter,
    config: PipelineConfig,
}

impl GenerationPipeline {
    /// Create a pipeline around an injected completion client
    pub fn new(
        client: Arc<dyn CompletionClient>,
        profiles: Arc<ProfileTable>,
        config: PipelineConfig,
    ) -> Self {
        let writer = match &config.output_dir {
            Some(dir) => ArtifactWriter::new(dir),
            None => ArtifactWriter::temp(),
        };

        Self {
            client,
            prompts: PromptBuilder::new(profiles),
            writer,
            config,
        }
    }

    pub fn profiles(&self) -> &ProfileTable {
        self.prompts.profiles()
    }

    pub fn writer(&self) -> &ArtifactWriter {
        &self.writer
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Generate a source file from natural-language requirements
    pub async fn generate_code(&self, requirements: &str, language: &str) -> Result<GenerationOutcome> {
        let kind = ArtifactKind::Code;

        if requirements.trim().is_empty() || language.trim().is_empty() {
            return Ok(GenerationOutcome::rejected(
                kind,
                CoreError::MissingInput(MISSING_REQUIREMENTS_MESSAGE.to_string()),
            ));
        }

        let profile = match self.profiles().lookup(language) {
            Ok(profile) => profile,
            Err(e) => return GenerationOutcome::reject_or_fail(kind, e),
        };

        let prompt = self.prompts.code_prompt(requirements, language)?;
        let artifact = self
            .complete_and_persist(kind, prompt, &profile.fence_tag, &profile.example_filename)
            .await?;

        Ok(GenerationOutcome::Ready(artifact))
    }

    /// Generate unit tests for the code shown in `current_code_view`
    pub async fn generate_tests(
        &self,
        current_code_view: &str,
        language: &str,
    ) -> Result<GenerationOutcome> {
        self.tests_from_code(&unwrap_rendered(current_code_view), language)
            .await
    }

    /// Generate unit tests for a code artifact
    pub async fn generate_tests_for(&self, code: &Artifact, language: &str) -> Result<GenerationOutcome> {
        self.tests_from_code(code.payload(), language).await
    }

    /// Generate a README for the code shown in `current_code_view`
    pub async fn generate_docs(
        &self,
        current_code_view: &str,
        language: &str,
    ) -> Result<GenerationOutcome> {
        self.docs_from_code(&unwrap_rendered(current_code_view), language)
            .await
    }

    /// Generate a README for a code artifact
    pub async fn generate_docs_for(&self, code: &Artifact, language: &str) -> Result<GenerationOutcome> {
        self.docs_from_code(code.payload(), language).await
    }

    async fn tests_from_code(&self, code: &str, language: &str) -> Result<GenerationOutcome> {
        let kind = ArtifactKind::Tests;
        let profile = match self.guard_existing_code(code, language) {
            Ok(profile) => profile,
            Err(e) => return GenerationOutcome::reject_or_fail(kind, e),
        };

        let prompt = self.prompts.tests_prompt(code, language)?;
        let artifact = self
            .complete_and_persist(kind, prompt, &profile.fence_tag, &profile.example_test_filename)
            .await?;

        Ok(GenerationOutcome::Ready(artifact))
    }

    async fn docs_from_code(&self, code: &str, language: &str) -> Result<GenerationOutcome> {
        let kind = ArtifactKind::Docs;
        let profile = match self.guard_existing_code(code, language) {
            Ok(profile) => profile,
            Err(e) => return GenerationOutcome::reject_or_fail(kind, e),
        };

        let prompt = self.prompts.docs_prompt(code, language)?;
        let artifact = self
            .complete_and_persist(kind, prompt, MARKDOWN_TAG, &profile.readme_name)
            .await?;

        Ok(GenerationOutcome::Ready(artifact))
    }

    fn guard_existing_code(&self, code: &str, language: &str) -> std::result::Result<&LanguageProfile, CoreError> {
        if code.trim().is_empty() || language.trim().is_empty() {
            return Err(CoreError::MissingInput(MISSING_CODE_MESSAGE.to_string()));
        }
        self.profiles().lookup(language)
    }

    async fn complete_and_persist(
        &self,
        kind: ArtifactKind,
        prompt: String,
        fence_tag: &str,
        filename: &str,
    ) -> Result<Artifact> {
        let mut request =
            CompletionRequest::new(prompt, self.config.model.as_str()).with_system(self.config.system.as_str());
        if let Some(temperature) = self.config.temperature {
            request = request.with_temperature(temperature);
        }
        if let Some(max_tokens) = self.config.max_tokens {
            request = request.with_max_tokens(max_tokens);
        }

        info!(%kind, client = self.client.name(), model = %self.config.model, "requesting completion");
        let started = Instant::now();

        let response = self.client.complete(request).await?;

        debug!(
            %kind,
            model = %response.model,
            tokens_used = response.tokens_used,
            finish_reason = %response.finish_reason,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "completion received"
        );

        let (payload, tier) = extract_with_tier(&response.content, fence_tag);
        if tier != ExtractionTier::TaggedFence {
            warn!(%kind, ?tier, fence_tag, "model did not return a block tagged as requested");
        }

        let path = self.writer.persist(&payload, filename).await?;

        Ok(Artifact::new(kind, payload, fence_tag).with_path(path))
    }
}
