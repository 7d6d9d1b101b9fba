//! branchslug - Branch Names from Issue and PR Titles
//!
//! Derives short, kebab-case git branch names from an issue or pull request
//! title and description. A language model is asked first; any failure falls
//! back to a deterministic slug built from the title.
//!
//! ## Quick Start
//!
//! ```ignore
//! use branchslug::{AnthropicProvider, BranchNamer, Credentials, GenerationRequest, ProviderConfig};
//!
//! let provider = AnthropicProvider::new(ProviderConfig::default(), Credentials::from_env())?;
//! let namer = BranchNamer::from_provider(provider);
//! let slug = namer.resolve(&GenerationRequest::issue("Fix login bug"), true).await;
//! ```
//!
//! ## Modules
//!
//! - [`slug`]: Sanitizer and title-truncation strategies
//! - [`ai`]: Credentials, prompt construction, Messages API provider
//! - [`namer`]: Model-first resolution with title fallback
//! - [`config`]: Layered configuration

pub mod ai;
pub mod cli;
pub mod config;
pub mod constants;
pub mod namer;
pub mod slug;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader, LlmConfig, NamingConfig};

// Error Types
pub use types::error::{BranchError, ErrorCategory, Result};

// Domain Types
pub use types::{BranchSlug, EntityType, GenerationRequest, is_valid_slug};

// =============================================================================
// Naming Re-exports
// =============================================================================

pub use ai::{AnthropicProvider, Credentials, NameProvider, ProviderConfig, SharedProvider};
pub use namer::{BranchNamer, Resolution, Strategy, branch_name};
pub use slug::{sanitize, truncate_title};
