//! Slug Command
//!
//! Run one slug strategy locally, without any network access.
//!
//! Usage:
//!   branchslug slug "Some Text" [--strategy sanitize|title]

use crate::cli::ui::Output;
use crate::constants::slug::{MODEL_PLACEHOLDER, SIMPLE_PLACEHOLDER};
use crate::slug::{sanitize, truncate_title};
use crate::types::{BranchError, BranchSlug, Result};

pub fn run(text: &str, strategy: &str) -> Result<()> {
    let slug = apply(text, strategy)?;
    Output::new().result(slug.as_str());
    Ok(())
}

fn apply(text: &str, strategy: &str) -> Result<BranchSlug> {
    match strategy {
        "sanitize" => Ok(sanitize(text, MODEL_PLACEHOLDER)),
        "title" => Ok(truncate_title(text, SIMPLE_PLACEHOLDER)),
        other => Err(BranchError::Config(format!(
            "Unknown strategy '{}'. Valid values: sanitize, title",
            other
        ))),
    }
}
