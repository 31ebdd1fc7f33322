//! Command-line interface for veil
//!
//! Provides `show`, `map` and `fixture` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod fixture;
mod map;
mod show;
mod utils;

/// Load veil map and fixture documents
#[derive(Parser)]
#[command(name = "veil")]
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
    /// Print the map's deidentify list and one fixture field
    Show(show::ShowArgs),

    /// Print both lists from a veil map
    Map(map::MapArgs),

    /// Print a fixture document or one of its keys
    Fixture(fixture::FixtureArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // The level only applies when RUST_LOG is unset.
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Show(args) => show::run(args),
        Commands::Map(args) => map::run(args),
        Commands::Fixture(args) => fixture::run(args),
    }
}
