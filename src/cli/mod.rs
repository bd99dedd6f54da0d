//! Command-line interface for jiracsv
//!
//! Provides `report`, `profiles` and `completions` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod completions;
mod profiles;
mod progress;
mod report;
mod utils;

/// Roll up Jira epics by component into a tab-separated progress report
#[derive(Parser)]
#[command(name = "jiracsv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the epics of a profile and write the component report
    Report(report::ReportArgs),

    /// List the search profiles of a configuration file
    Profiles(profiles::ProfilesArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Report(args) => report::run(args),
        Commands::Profiles(args) => profiles::run(args),
        Commands::Completions(args) => completions::run(args),
    }
}
