//! Name Provider Abstraction
//!
//! Defines the `NameProvider` trait the orchestrator calls for model-backed
//! branch names. The Anthropic Messages API is the only real implementation;
//! the trait is the seam the orchestrator is tested through.

mod anthropic;

pub use anthropic::AnthropicProvider;

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::LlmConfig;
use crate::constants::api;
use crate::types::{BranchSlug, GenerationRequest, Result};

/// Shared provider handle
pub type SharedProvider = Arc<dyn NameProvider>;

// =============================================================================
// Provider Configuration
// =============================================================================

/// Configuration for the naming provider
///
/// Credentials are never part of this struct; they are passed to the
/// provider separately as [`crate::ai::Credentials`].
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Model identifier
    pub model: String,
    /// Maximum output tokens
    pub max_tokens: u32,
    /// API base URL, without the `/v1/messages` path
    pub api_base: String,
    /// Request timeout in seconds (`None` keeps the HTTP client default)
    pub timeout_secs: Option<u64>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: api::DEFAULT_MODEL.to_string(),
            max_tokens: api::DEFAULT_MAX_TOKENS,
            api_base: api::DEFAULT_API_BASE.to_string(),
            timeout_secs: None,
        }
    }
}

impl From<&LlmConfig> for ProviderConfig {
    fn from(llm: &LlmConfig) -> Self {
        Self {
            model: llm.model.clone(),
            max_tokens: llm.max_tokens,
            api_base: llm.api_base.clone(),
            timeout_secs: llm.timeout_secs,
        }
    }
}

// =============================================================================
// Name Provider Trait
// =============================================================================

/// Model-backed branch name generation
///
/// Implementations make at most one attempt and surface every failure;
/// recovery belongs to the caller.
#[async_trait]
pub trait NameProvider: Send + Sync {
    /// Generate a sanitized branch slug for the request
    async fn generate(&self, request: &GenerationRequest) -> Result<BranchSlug>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Model name currently in use
    fn model(&self) -> &str;
}
