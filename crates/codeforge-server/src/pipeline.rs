//! Generation pipeline initialization
//!
//! Turns the server configuration into a ready pipeline backed by the
//! OpenAI-compatible provider.

use crate::config::ServerConfig;
use anyhow::Result;
use codeforge_llm::{CompletionClient, OpenAIProvider};
use codeforge_sdk::{GenerationPipeline, PipelineBuilder};
use std::sync::Arc;
use tracing::info;

/// Initialize the pipeline, reading the API key from `OPENAI_API_KEY`
pub fn init_pipeline(config: &ServerConfig) -> Result<GenerationPipeline> {
    let provider =
        OpenAIProvider::from_env_with_options(config.llm.base_url.clone(), config.llm.timeout())?;
    info!(
        "Using completion endpoint {} (timeout {}s)",
        provider.base_url(),
        config.llm.timeout_secs
    );

    build_pipeline(config, Arc::new(provider))
}

/// Build the pipeline around any completion client
pub fn build_pipeline(
    config: &ServerConfig,
    client: Arc<dyn CompletionClient>,
) -> Result<GenerationPipeline> {
    let mut builder = PipelineBuilder::new()
        .with_client(client)
        .with_config(config.pipeline_config());

    if let Some(path) = &config.profiles_file {
        info!("Loading language profiles from {}", path.display());
        builder = builder.with_profiles_file(path.clone());
    }

    let pipeline = builder.build()?;

    if !pipeline.profiles().contains(&config.default_language) {
        return Err(anyhow::anyhow!(
            "Default language '{}' is not in the profile table (supported: {})",
            config.default_language,
            pipeline.profiles().languages().collect::<Vec<_>>().join(", ")
        ));
    }

    Ok(pipeline)
}
