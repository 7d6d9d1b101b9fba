//! Slug Strategies
//!
//! Two independent ways of turning text into a [`BranchSlug`]:
//!
//! - [`sanitize`]: cleans free-form model output (quotes, underscores, punctuation)
//! - [`truncate_title`]: keeps the first few words of an issue or PR title
//!
//! They look alike but differ in edge cases (quote stripping, underscore
//! handling, word limit), so callers pick one explicitly.

mod sanitize;
mod title;

pub use sanitize::sanitize;
pub use title::truncate_title;

use crate::constants::slug::MAX_LEN;
use crate::types::BranchSlug;

fn is_slug_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
}

/// Collapse runs of `-` into a single `-`
fn collapse_hyphens(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_was_hyphen = false;
    for ch in s.chars() {
        if ch == '-' {
            if !last_was_hyphen {
                out.push('-');
            }
            last_was_hyphen = true;
        } else {
            out.push(ch);
            last_was_hyphen = false;
        }
    }
    out
}

/// Cap at `MAX_LEN` and drop a hyphen exposed by the cut.
///
/// Input must already be ASCII.
fn cap_length(s: &str) -> &str {
    if s.len() <= MAX_LEN {
        return s;
    }
    s[..MAX_LEN].trim_end_matches('-')
}

fn finish(slug: &str, placeholder: &'static str) -> BranchSlug {
    if slug.is_empty() {
        BranchSlug::from_sanitized(placeholder.to_string())
    } else {
        BranchSlug::from_sanitized(slug.to_string())
    }
}
