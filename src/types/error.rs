//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Error Categories
//!
//! - **Credential**: No usable secret in the environment (model path never attempted)
//! - **Upstream**: Non-success HTTP status or an empty success payload
//! - **Transport**: Connectivity or request-building failures
//! - **Parse**: The response body was not the expected JSON
//! - **Config**: Invalid configuration or local I/O
//!
//! Naming itself never surfaces these to the user: the orchestrator recovers from
//! every generator failure. Categories exist so the fallback warning says what
//! went wrong.

use thiserror::Error;

// =============================================================================
// Error Categories
// =============================================================================

/// Error categories used when reporting a fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Neither credential form is present
    Credential,
    /// The API answered, but not with a usable name
    Upstream,
    /// The request never completed
    Transport,
    /// The response body could not be decoded
    Parse,
    /// Local configuration or filesystem problem
    Config,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Credential => write!(f, "CREDENTIAL"),
            Self::Upstream => write!(f, "UPSTREAM"),
            Self::Transport => write!(f, "TRANSPORT"),
            Self::Parse => write!(f, "PARSE"),
            Self::Config => write!(f, "CONFIG"),
        }
    }
}

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum BranchError {
    // -------------------------------------------------------------------------
    // Generator Errors
    // -------------------------------------------------------------------------
    #[error("No credentials found: set ANTHROPIC_API_KEY or CLAUDE_CODE_OAUTH_TOKEN")]
    MissingCredentials,

    /// Non-success HTTP status with the response text
    #[error("API request failed with status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("no content returned")]
    NoContent,

    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BranchError>;

impl BranchError {
    /// Create an upstream error from a status code and response text
    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            body: body.into(),
        }
    }

    /// Category of this error for diagnostics
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingCredentials => ErrorCategory::Credential,
            Self::Upstream { .. } | Self::NoContent => ErrorCategory::Upstream,
            Self::Http(e) if e.is_decode() => ErrorCategory::Parse,
            Self::Http(_) => ErrorCategory::Transport,
            Self::Json(_) => ErrorCategory::Parse,
            Self::Io(_) | Self::Config(_) => ErrorCategory::Config,
        }
    }

    /// HTTP status carried by the error, if the API answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category_display() {
        assert_eq!(ErrorCategory::Credential.to_string(), "CREDENTIAL");
        assert_eq!(ErrorCategory::Upstream.to_string(), "UPSTREAM");
        assert_eq!(ErrorCategory::Parse.to_string(), "PARSE");
    }

    #[test]
    fn test_upstream_display_carries_status_and_body() {
        let err = BranchError::upstream(500, "rate limited");
        assert_eq!(
            err.to_string(),
            "API request failed with status 500: rate limited"
        );
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.category(), ErrorCategory::Upstream);
    }

    #[test]
    fn test_no_content_message() {
        assert_eq!(BranchError::NoContent.to_string(), "no content returned");
        assert_eq!(BranchError::NoContent.category(), ErrorCategory::Upstream);
        assert_eq!(BranchError::NoContent.status(), None);
    }

    #[test]
    fn test_json_error_is_parse_category() {
        let err: BranchError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert_eq!(err.category(), ErrorCategory::Parse);
    }

    #[test]
    fn test_missing_credentials_category() {
        let err = BranchError::MissingCredentials;
        assert_eq!(err.category(), ErrorCategory::Credential);
        assert!(err.to_string().contains("ANTHROPIC_API_KEY"));
    }
}
