//! Prompt Construction
//!
//! System instruction and user message for branch-name generation.

use crate::constants::prompt::MAX_BODY_CHARS;
use crate::types::GenerationRequest;

/// System instruction sent with every naming request
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant that generates concise git branch names \
for GitHub issues and pull requests. Given a title and an optional description, \
generate a short, descriptive branch name of 3-4 words that summarizes the change. \
Use only lowercase letters, numbers and hyphens. \
Do not include prefixes like 'feature/' or 'fix/' and do not add suffixes like issue numbers. \
Start with an action verb such as fix, add, update, remove, refactor, improve or implement. \
Respond with only the branch name and nothing else.";

/// Build the user message for a naming request.
///
/// The title is embedded verbatim; the body is cut to its first
/// 500 characters without an ellipsis.
pub fn user_prompt(request: &GenerationRequest) -> String {
    let description = if request.has_body() {
        truncate_body(&request.body)
    } else {
        "No description provided"
    };

    format!(
        "Generate a branch name for this {}:\n\nTitle: {}\n\nDescription: {}",
        request.entity_type.noun(),
        request.title,
        description
    )
}

/// First `MAX_BODY_CHARS` characters of `body`
pub fn truncate_body(body: &str) -> &str {
    match body.char_indices().nth(MAX_BODY_CHARS) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
