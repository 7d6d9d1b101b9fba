//! Config Command
//!
//! Manage branchslug configuration.
//!
//! Usage:
//!   branchslug config show [-f json]
//!   branchslug config path
//!   branchslug config init [-g] [--force]

use crate::cli::ui::Output;
use crate::config::ConfigLoader;
use crate::types::Result;

/// Show the merged effective configuration
pub fn show(format: &str) -> Result<()> {
    let config = ConfigLoader::load()?;
    let rendered = ConfigLoader::render_config(&config, format == "json")?;
    Output::new().result(rendered.trim_end());
    Ok(())
}

/// Show configuration paths
pub fn path() -> Result<()> {
    ConfigLoader::show_path();
    Ok(())
}

/// Initialize global or project configuration
pub fn init(global: bool, force: bool) -> Result<()> {
    let output = Output::new();
    let config_path = if global {
        ConfigLoader::init_global(force)?
    } else {
        ConfigLoader::init_project(force)?
    };

    output.success(if global {
        "Initialized global configuration"
    } else {
        "Initialized project configuration"
    });
    output.detail("Config:", &config_path.display().to_string());
    Ok(())
}
