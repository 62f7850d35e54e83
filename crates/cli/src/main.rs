//! reagent CLI — the main entry point.
//!
//! Commands:
//! - `ask`    — Run one query through the decision loop
//! - `chat`   — Interactive session with conversation history
//! - `tools`  — List the built-in tools
//! - `config` — Inspect and initialize configuration

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "reagent",
    about = "reagent — a ReAct decision loop with pluggable tools",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single query and print the result
    Ask {
        /// The question or task for the agent
        query: String,

        /// Print the reasoning trace after the result
        #[arg(short, long)]
        trace: bool,

        /// Print the full run report as JSON (implies no plain output)
        #[arg(long)]
        json: bool,
    },

    /// Chat interactively; history carries across runs
    Chat,

    /// List the built-in tools
    Tools,

    /// Inspect and initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a default config file
    Init,

    /// Print the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Check the configuration for problems
    Validate,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Ask { query, trace, json } => commands::ask::run(&query, trace, json).await?,
        Commands::Chat => commands::chat::run().await?,
        Commands::Tools => commands::tools::run().await?,
        Commands::Config { action } => match action {
            ConfigAction::Init => commands::config_cmd::init().await?,
            ConfigAction::Show => commands::config_cmd::show().await?,
            ConfigAction::Path => commands::config_cmd::path().await?,
            ConfigAction::Validate => commands::config_cmd::validate().await?,
        },
    }

    Ok(())
}
