//! Deterministic slug from the first words of a title.

use super::{cap_length, collapse_hyphens, finish, is_slug_char};
use crate::constants::slug::TITLE_WORDS;
use crate::types::BranchSlug;

/// Build a slug from the first three whitespace-separated words of `title`.
///
/// Used when model generation is disabled or has failed.
pub fn truncate_title(title: &str, placeholder: &'static str) -> BranchSlug {
    let joined = title
        .split_whitespace()
        .take(TITLE_WORDS)
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();

    let filtered: String = joined.chars().filter(|c| is_slug_char(*c)).collect();
    let collapsed = collapse_hyphens(&filtered);

    finish(cap_length(collapsed.trim_matches('-')), placeholder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::slug::{FALLBACK_PLACEHOLDER, MAX_LEN, SIMPLE_PLACEHOLDER};
    use crate::types::is_valid_slug;
    use proptest::prelude::*;

    #[test]
    fn test_three_words() {
        assert_eq!(
            truncate_title("Fix login bug", SIMPLE_PLACEHOLDER),
            "fix-login-bug"
        );
        assert_eq!(
            truncate_title("Update docs for API", FALLBACK_PLACEHOLDER),
            "update-docs-for"
        );
    }

    #[test]
    fn test_blank_title_uses_placeholder() {
        assert_eq!(truncate_title("   ", SIMPLE_PLACEHOLDER), SIMPLE_PLACEHOLDER);
        assert_eq!(truncate_title("", FALLBACK_PLACEHOLDER), FALLBACK_PLACEHOLDER);
        assert_eq!(
            truncate_title("!!! ??? ...", FALLBACK_PLACEHOLDER),
            FALLBACK_PLACEHOLDER
        );
    }

    #[test]
    fn test_punctuation_tokens_collapse() {
        assert_eq!(
            truncate_title("Fix: !! crash on startup", SIMPLE_PLACEHOLDER),
            "fix-crash"
        );
        assert_eq!(
            truncate_title("[Bug] Parser panics", SIMPLE_PLACEHOLDER),
            "bug-parser-panics"
        );
    }

    #[test]
    fn test_leading_whitespace_ignored() {
        assert_eq!(
            truncate_title("  \tAdd   new\nfeature flag", SIMPLE_PLACEHOLDER),
            "add-new-feature"
        );
    }

    #[test]
    fn test_long_words_capped() {
        let word = "x".repeat(40);
        let title = format!("{word} {word} {word}");
        let slug = truncate_title(&title, SIMPLE_PLACEHOLDER);
        assert!(slug.as_str().len() <= MAX_LEN);
        assert!(is_valid_slug(slug.as_str()));
    }

    proptest! {
        #[test]
        fn prop_output_is_valid_slug(title in any::<String>()) {
            let slug = truncate_title(&title, FALLBACK_PLACEHOLDER);
            prop_assert!(is_valid_slug(slug.as_str()));
        }
    }
}
