//! Name Command
//!
//! Resolve a branch name for an issue or pull request.
//!
//! Usage:
//!   branchslug name --title "Fix login bug" [--body TEXT | --body-file PATH|-]
//!                   [--type issue|pr] [--no-model] [--prefix P] [-f json]

use std::io::Read;
use std::path::{Path, PathBuf};

use tokio::runtime::Runtime;
use tracing::debug;

use crate::ai::{AnthropicProvider, Credentials, ProviderConfig};
use crate::cli::ui::Output;
use crate::config::ConfigLoader;
use crate::namer::{BranchNamer, Resolution, branch_name, validate_prefix};
use crate::types::{EntityType, GenerationRequest, Result};

/// Options for the name command
#[derive(Debug, Clone)]
pub struct NameOptions {
    pub title: String,
    pub body: Option<String>,
    /// File to read the body from; `-` reads stdin
    pub body_file: Option<PathBuf>,
    pub entity_type: EntityType,
    pub no_model: bool,
    pub prefix: Option<String>,
    pub format: String,
}

pub fn run(options: NameOptions) -> Result<()> {
    let config = ConfigLoader::load()?;

    let body = match (&options.body, &options.body_file) {
        (Some(body), _) => body.clone(),
        (None, Some(path)) => read_body(path)?,
        (None, None) => String::new(),
    };

    let prefix = options.prefix.clone().or_else(|| config.naming.prefix.clone());
    if let Some(p) = &prefix {
        validate_prefix(p)?;
    }

    let use_model = config.naming.use_model && !options.no_model;
    let credentials = if use_model {
        Credentials::from_env()
    } else {
        None
    };
    debug!(
        "Resolving branch name (model: {}, credentials: {})",
        use_model,
        credentials.as_ref().map_or("none", |c| c.kind())
    );

    let provider = AnthropicProvider::new(ProviderConfig::from(&config.llm), credentials)?;
    let namer = BranchNamer::from_provider(provider);
    let request = GenerationRequest::new(options.title, body, options.entity_type);

    let rt = Runtime::new()?;
    let resolution = rt.block_on(namer.resolve_detailed(&request, use_model));

    let rendered = render(&resolution, prefix.as_deref(), &options.format)?;
    Output::new().result(&rendered);
    Ok(())
}

fn read_body(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut body = String::new();
        std::io::stdin().read_to_string(&mut body)?;
        Ok(body)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

fn render(resolution: &Resolution, prefix: Option<&str>, format: &str) -> Result<String> {
    let branch = branch_name(prefix, &resolution.slug);
    if format == "json" {
        let value = serde_json::json!({
            "branch": branch,
            "slug": resolution.slug,
            "strategy": resolution.strategy,
        });
        Ok(serde_json::to_string_pretty(&value)?)
    } else {
        Ok(branch)
    }
}
