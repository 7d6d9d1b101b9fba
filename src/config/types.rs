//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Credentials are deliberately absent: they only come from the environment.

use serde::{Deserialize, Serialize};

use crate::constants::api;
use crate::types::{BranchError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Messages API settings
    pub llm: LlmConfig,

    /// Naming behavior
    pub naming: NamingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            llm: LlmConfig::default(),
            naming: NamingConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `BranchError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if self.llm.model.trim().is_empty() {
            return Err(BranchError::Config(
                "LLM model must not be empty".to_string(),
            ));
        }

        if self.llm.max_tokens == 0 {
            return Err(BranchError::Config(
                "LLM max_tokens must be greater than 0".to_string(),
            ));
        }

        if self.llm.timeout_secs == Some(0) {
            return Err(BranchError::Config(
                "LLM timeout_secs must be greater than 0 when set".to_string(),
            ));
        }

        let base = url::Url::parse(&self.llm.api_base).map_err(|e| {
            BranchError::Config(format!("Invalid LLM api_base '{}': {}", self.llm.api_base, e))
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(BranchError::Config(format!(
                "LLM api_base must use http or https, got '{}'",
                base.scheme()
            )));
        }

        if let Some(prefix) = &self.naming.prefix {
            crate::namer::validate_prefix(prefix)?;
        }

        Ok(())
    }
}

// =============================================================================
// LLM Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Model identifier
    pub model: String,

    /// Output token budget for one branch name
    pub max_tokens: u32,

    /// API base URL (the `/v1/messages` path is appended)
    pub api_base: String,

    /// Request timeout in seconds; unset keeps the HTTP client default
    pub timeout_secs: Option<u64>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: api::DEFAULT_MODEL.to_string(),
            max_tokens: api::DEFAULT_MAX_TOKENS,
            api_base: api::DEFAULT_API_BASE.to_string(),
            timeout_secs: None,
        }
    }
}

// =============================================================================
// Naming Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Ask the model before falling back to title truncation
    pub use_model: bool,

    /// Optional branch prefix, joined as `prefix/slug`
    pub prefix: Option<String>,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            use_model: true,
            prefix: None,
        }
    }
}
