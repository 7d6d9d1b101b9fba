//! Sanitizer for free-form text, typically a model reply.

use super::{cap_length, collapse_hyphens, finish, is_slug_char};
use crate::types::BranchSlug;

/// Turn arbitrary text into a branch slug.
///
/// Never fails: text that cleans up to nothing yields `placeholder`.
/// Already-valid slugs come back unchanged.
pub fn sanitize(text: &str, placeholder: &'static str) -> BranchSlug {
    let lowered = text.to_lowercase();
    let unquoted = strip_quotes(lowered.trim());
    let hyphenated = hyphenate_gaps(unquoted);

    let filtered: String = hyphenated.chars().filter(|c| is_slug_char(*c)).collect();
    let collapsed = collapse_hyphens(&filtered);

    finish(cap_length(collapsed.trim_matches('-')), placeholder)
}

/// Strip one leading and one trailing quote, independently
fn strip_quotes(s: &str) -> &str {
    let s = s.strip_prefix(['"', '\'']).unwrap_or(s);
    s.strip_suffix(['"', '\'']).unwrap_or(s)
}

/// Replace each run of whitespace or underscores with a single hyphen
fn hyphenate_gaps(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_gap = false;
    for ch in s.chars() {
        if ch.is_whitespace() || ch == '_' {
            if !in_gap {
                out.push('-');
            }
            in_gap = true;
        } else {
            out.push(ch);
            in_gap = false;
        }
    }
    out
}
