//! Common test utilities for SDK integration tests

use codeforge_sdk::{GenerationOutcome, GenerationPipeline, MockProvider, PipelineBuilder};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// Pipeline wired to a scripted mock client and a private output directory
pub struct TestPipeline {
    pub pipeline: GenerationPipeline,
    pub provider: Arc<MockProvider>,
    pub dir: TempDir,
}

impl TestPipeline {
    /// Serve `responses` in order, one per completion call
    pub fn scripted<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_provider(MockProvider::with_responses(responses))
    }

    pub fn with_provider(provider: MockProvider) -> Self {
        let dir = TempDir::new().unwrap();
        let provider = Arc::new(provider);
        let pipeline = PipelineBuilder::new()
            .with_client(provider.clone())
            .with_output_dir(dir.path())
            .build()
            .unwrap();

        Self {
            pipeline,
            provider,
            dir,
        }
    }

    /// Number of files written so far
    pub fn file_count(&self) -> usize {
        std::fs::read_dir(self.dir.path()).unwrap().count()
    }
}

/// Assertion helpers for generation outcomes
pub trait OutcomeAssertions {
    fn assert_ready_with_file(&self, prefix: &str, suffix: &str) -> &Path;
    fn assert_rejected_with(&self, message: &str);
}

impl OutcomeAssertions for GenerationOutcome {
    fn assert_ready_with_file(&self, prefix: &str, suffix: &str) -> &Path {
        assert!(self.is_ready(), "expected ready outcome, got {:?}", self);
        assert!(self.error_message().is_none());

        let path = self.file_path().expect("ready outcome without a file");
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(
            name.starts_with(prefix) && name.ends_with(suffix),
            "unexpected file name {}",
            name
        );
        path
    }

    fn assert_rejected_with(&self, message: &str) {
        assert!(!self.is_ready(), "expected rejection, got {:?}", self);
        assert_eq!(self.error_message(), Some(message));
        assert!(self.view().is_none());
        assert!(self.file_path().is_none());
    }
}
