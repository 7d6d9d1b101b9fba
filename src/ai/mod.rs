//! AI Integration Layer
//!
//! Model-backed branch naming over the Anthropic Messages API.

pub mod credentials;
pub mod prompt;
pub mod provider;

pub use credentials::Credentials;
pub use prompt::{SYSTEM_PROMPT, truncate_body, user_prompt};
pub use provider::{AnthropicProvider, NameProvider, ProviderConfig, SharedProvider};
