//! Configuration for the extractor

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the extractor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Maximum input article length (characters)
    pub max_article_length: usize,

    /// Maximum time for a single per-sentence LLM call (seconds)
    pub llm_timeout_secs: u64,

    /// Drop entries whose term was already produced by an earlier sentence
    ///
    /// Off by default: repeated terms across sentences can be deliberate
    /// reinforcement, so dropping them is an explicit choice.
    pub dedup_terms: bool,
}

impl ExtractorConfig {
    /// Get the per-call LLM timeout as a Duration
    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_article_length == 0 {
            return Err("max_article_length must be greater than 0".to_string());
        }
        if self.llm_timeout_secs == 0 {
            return Err("llm_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Patient preset: longer per-call timeout for slow local models
    pub fn patient() -> Self {
        Self {
            llm_timeout_secs: 300,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    /// Default configuration with balanced settings
    fn default() -> Self {
        Self {
            max_article_length: 50_000,
            llm_timeout_secs: 120,
            dedup_terms: false,
        }
    }
}
