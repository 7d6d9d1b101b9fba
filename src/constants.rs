//! Global Constants
//!
//! Centralized constants for naming rules and the Messages API.

/// Slug shape constants
pub mod slug {
    /// Maximum length of a sanitized slug
    pub const MAX_LEN: usize = 50;

    /// Number of title words kept by the title-truncation strategy
    pub const TITLE_WORDS: usize = 3;

    /// Placeholder when a model reply sanitizes to nothing
    pub const MODEL_PLACEHOLDER: &str = "claude-generated";

    /// Placeholder when model generation was not requested
    pub const SIMPLE_PLACEHOLDER: &str = "simple-description";

    /// Placeholder when model generation failed
    pub const FALLBACK_PLACEHOLDER: &str = "fallback-description";
}

/// Prompt construction constants
pub mod prompt {
    /// Body characters embedded in the user message
    pub const MAX_BODY_CHARS: usize = 500;
}

/// Anthropic Messages API constants
pub mod api {
    pub const DEFAULT_API_BASE: &str = "https://api.anthropic.com";

    /// Path appended to the API base
    pub const MESSAGES_PATH: &str = "/v1/messages";

    pub const DEFAULT_MODEL: &str = "claude-3-5-haiku-20241022";

    /// Output token budget for a branch name
    pub const DEFAULT_MAX_TOKENS: u32 = 50;

    pub const ANTHROPIC_VERSION: &str = "2023-06-01";
}

/// Environment variables
pub mod env {
    /// API key credential (sent as `x-api-key`)
    pub const API_KEY: &str = "ANTHROPIC_API_KEY";

    /// OAuth token credential (sent as `Authorization: Bearer`)
    pub const OAUTH_TOKEN: &str = "CLAUDE_CODE_OAUTH_TOKEN";

    /// Prefix for configuration overrides
    pub const CONFIG_PREFIX: &str = "BRANCHSLUG_";
}
