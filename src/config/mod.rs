//! Configuration Management
//!
//! Hierarchical resolution:
//! 1. Built-in defaults
//! 2. Global config (~/.config/branchslug/config.toml)
//! 3. Project config (.branchslug.toml)
//! 4. Environment variables (BRANCHSLUG_*)
//! 5. CLI arguments (highest priority)

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::*;
