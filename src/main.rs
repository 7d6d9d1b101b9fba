use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use branchslug::EntityType;
use branchslug::cli::NameOptions;
use branchslug::cli::ui::Output;

/// Parse entity type from string
fn parse_entity_type(s: &str) -> Result<EntityType, String> {
    s.parse()
}

#[derive(Parser)]
#[command(name = "branchslug")]
#[command(
    version,
    about = "Derive short git branch names from issue and pull request titles"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true)]
    verbose: bool,

    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a branch name for an issue or pull request
    Name {
        #[arg(long, short, help = "Issue or pull request title")]
        title: String,
        #[arg(long, short, conflicts_with = "body_file", help = "Description text")]
        body: Option<String>,
        #[arg(long, help = "Read the description from a file ('-' for stdin)")]
        body_file: Option<PathBuf>,
        #[arg(
            long = "type",
            default_value = "issue",
            value_parser = parse_entity_type,
            help = "Entity type: issue, pr"
        )]
        entity_type: EntityType,
        #[arg(long, help = "Skip the model and truncate the title")]
        no_model: bool,
        #[arg(long, help = "Branch prefix, joined as prefix/slug")]
        prefix: Option<String>,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },

    /// Turn text into a slug locally
    Slug {
        #[arg(help = "Text to convert")]
        text: String,
        #[arg(
            long,
            default_value = "sanitize",
            help = "Strategy: sanitize, title"
        )]
        strategy: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "toml",
            help = "Output format: toml, json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
    /// Write a default configuration file
    Init {
        #[arg(long, short, help = "Initialize global config")]
        global: bool,
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\nbranchslug encountered an unexpected error:");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "Location: {}:{}:{}",
                location.file(),
                location.line(),
                location.column()
            );
        }

        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Output::new().error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    // Diagnostics go to stderr; stdout carries only the result
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Name {
            title,
            body,
            body_file,
            entity_type,
            no_model,
            prefix,
            format,
        } => {
            branchslug::cli::commands::name::run(NameOptions {
                title,
                body,
                body_file,
                entity_type,
                no_model,
                prefix,
                format,
            })?;
        }
        Commands::Slug { text, strategy } => {
            branchslug::cli::commands::slug::run(&text, &strategy)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => {
                branchslug::cli::commands::config::show(&format)?;
            }
            ConfigAction::Path => {
                branchslug::cli::commands::config::path()?;
            }
            ConfigAction::Init { global, force } => {
                branchslug::cli::commands::config::init(global, force)?;
            }
        },
    }

    Ok(())
}
