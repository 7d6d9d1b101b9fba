pub mod error;
pub mod request;

pub use error::{BranchError, ErrorCategory, Result};
pub use request::{EntityType, GenerationRequest};

// =============================================================================
// Domain Newtypes
// =============================================================================

use serde::Serialize;
use std::fmt;

/// A branch-safe slug
///
/// Always non-empty, at most 50 characters, and shaped like
/// `[a-z0-9]+(-[a-z0-9]+)*`. Only the strategies in [`crate::slug`] build one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BranchSlug(String);

impl BranchSlug {
    pub(crate) fn from_sanitized(slug: String) -> Self {
        debug_assert!(is_valid_slug(&slug), "invalid slug: {slug:?}");
        Self(slug)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BranchSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for BranchSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for BranchSlug {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BranchSlug {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Check the slug shape: lowercase alphanumeric words joined by single hyphens
pub fn is_valid_slug(s: &str) -> bool {
    !s.is_empty()
        && s.len() <= crate::constants::slug::MAX_LEN
        && s.split('-').all(|word| {
            !word.is_empty()
                && word
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        })
}
