//! Server configuration

use codeforge_llm::provider::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use codeforge_sdk::{PipelineConfig, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Config file read by [`ServerConfig::load`], extension resolved by the config crate
pub const DEFAULT_CONFIG_FILE: &str = "config/server";

/// Completion service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// Base URL of the chat-completions API
    pub base_url: String,

    /// Model name
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Maximum tokens per completion (provider default when unset)
    pub max_tokens: Option<u32>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: None,
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl LlmSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Log level for the codeforge crates when RUST_LOG is unset
    pub log_level: String,

    /// Directory artifacts are written to (`codeforge/` under the OS temp dir when unset)
    pub output_dir: Option<PathBuf>,

    /// YAML file with extra or replacement language profiles
    pub profiles_file: Option<PathBuf>,

    /// Language preselected in the dropdown
    pub default_language: String,

    /// Completion service settings
    pub llm: LlmSettings,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            output_dir: None,
            profiles_file: None,
            default_language: "java".to_string(),
            llm: LlmSettings::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load from `file` (any extension the config crate knows, optional)
    /// layered under `CODEFORGE_*` environment variables.
    ///
    /// A missing file means defaults; a file that exists but does not parse
    /// is an error.
    pub fn load_from(file: &str) -> anyhow::Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(file).required(false))
            .add_source(
                config::Environment::with_prefix("CODEFORGE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to load config from {}: {}", file, e))?;

        Self::from_config(cfg)
    }

    /// Deserialize from an already built config
    pub fn from_config(cfg: config::Config) -> anyhow::Result<Self> {
        cfg.try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))
    }

    /// Pipeline settings derived from this configuration
    pub fn pipeline_config(&self) -> PipelineConfig {
        let mut pipeline = PipelineConfig::new()
            .with_model(self.llm.model.clone())
            .with_temperature(self.llm.temperature);

        if let Some(max_tokens) = self.llm.max_tokens {
            pipeline = pipeline.with_max_tokens(max_tokens);
        }
        if let Some(dir) = &self.output_dir {
            pipeline = pipeline.with_output_dir(dir.clone());
        }

        pipeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Config, File, FileFormat};

    fn from_yaml(yaml: &str) -> ServerConfig {
        let cfg = Config::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()
            .unwrap();
        ServerConfig::from_config(cfg).unwrap()
    }

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.default_language, "java");
        assert!(config.output_dir.is_none());
        assert!(config.profiles_file.is_none());
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.base_url, "https://api.openai.com/v1");
        assert_eq!(config.llm.timeout(), Duration::from_secs(120));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = from_yaml(
            r#"
port: 9000
output_dir: /var/tmp/codeforge
llm:
  model: gpt-4o
  max_tokens: 2048
"#,
        );

        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.output_dir, Some(PathBuf::from("/var/tmp/codeforge")));
        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(config.llm.max_tokens, Some(2048));
        assert_eq!(config.llm.timeout_secs, 120);
    }

    #[test]
    fn test_empty_source_is_default() {
        let config = ServerConfig::from_config(Config::builder().build().unwrap()).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_invalid_port_is_error() {
        let cfg = Config::builder()
            .add_source(File::from_str("port: not-a-port", FileFormat::Yaml))
            .build()
            .unwrap();
        assert!(ServerConfig::from_config(cfg).is_err());
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("server");

        let config = ServerConfig::load_from(file.to_str().unwrap()).unwrap();
        assert_eq!(config.port, ServerConfig::default().port);
        assert_eq!(config.llm.model, "gpt-4o-mini");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("server.yaml"), "port: 9100\nlog_level: debug\n").unwrap();

        let file = dir.path().join("server");
        let config = ServerConfig::load_from(file.to_str().unwrap()).unwrap();

        assert_eq!(config.port, 9100);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_load_from_malformed_file_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("server.yaml"), "port: [8080\nhost: :\n").unwrap();

        let file = dir.path().join("server");
        let err = ServerConfig::load_from(file.to_str().unwrap()).unwrap_err();

        assert!(err.to_string().contains("Failed to load config from"));
        assert!(err.to_string().contains("server"));
    }

    #[test]
    fn test_pipeline_config() {
        let mut config = ServerConfig::default();
        config.llm.temperature = 0.7;
        config.llm.max_tokens = Some(512);
        config.output_dir = Some(PathBuf::from("/tmp/artifacts"));

        let pipeline = config.pipeline_config();

        assert_eq!(pipeline.model, "gpt-4o-mini");
        assert_eq!(pipeline.temperature, Some(0.7));
        assert_eq!(pipeline.max_tokens, Some(512));
        assert_eq!(pipeline.output_dir, Some(PathBuf::from("/tmp/artifacts")));
    }
}
