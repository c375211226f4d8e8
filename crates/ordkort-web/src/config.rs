//! Configuration file parsing for the web server.
//!
//! Loads settings from TOML files including bind address, Ollama endpoint
//! and model, article language, and extractor tuning.

use ordkort_extractor::ExtractorConfig;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Web server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A field failed validation
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Web server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 8080)
    pub bind_port: u16,

    /// Ollama API endpoint
    #[serde(default = "default_ollama_endpoint")]
    pub ollama_endpoint: String,

    /// Model to use (e.g., "gemma3:4b")
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Wikipedia language edition (e.g., "sv")
    #[serde(default = "default_wiki_language")]
    pub wiki_language: String,

    /// Extractor tuning
    #[serde(default)]
    pub extractor: ExtractorSection,
}

/// The `[extractor]` section of the config file
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractorSection {
    /// Maximum input article length (characters)
    pub max_article_length: usize,

    /// Maximum time for a single per-sentence LLM call (seconds)
    pub llm_timeout_secs: u64,

    /// Drop duplicate terms across sentences
    pub dedup_terms: bool,
}

impl Default for ExtractorSection {
    fn default() -> Self {
        let base = ExtractorConfig::default();
        Self {
            max_article_length: base.max_article_length,
            llm_timeout_secs: base.llm_timeout_secs,
            dedup_terms: base.dedup_terms,
        }
    }
}

impl From<ExtractorSection> for ExtractorConfig {
    fn from(section: ExtractorSection) -> Self {
        ExtractorConfig {
            max_article_length: section.max_article_length,
            llm_timeout_secs: section.llm_timeout_secs,
            dedup_terms: section.dedup_terms,
        }
    }
}

fn default_ollama_endpoint() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "gemma3:4b".to_string()
}

fn default_temperature() -> f64 {
    0.5
}

fn default_wiki_language() -> String {
    "sv".to_string()
}

impl WebConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: WebConfig = toml::from_str(&contents)?;

        ExtractorConfig::from(config.extractor.clone())
            .validate()
            .map_err(ConfigError::Invalid)?;

        Ok(config)
    }

    /// Create a default configuration for local use
    pub fn default_test_config() -> Self {
        WebConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8080,
            ollama_endpoint: default_ollama_endpoint(),
            model: default_model(),
            temperature: default_temperature(),
            wiki_language: default_wiki_language(),
            extractor: ExtractorSection::default(),
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}
