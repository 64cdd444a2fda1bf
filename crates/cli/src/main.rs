//! Command-line host for budding crystal formations.
//!
//! Run with: `cargo run -p crystal-cli -- <command>`

mod commands;
mod content;

use anyhow::Result;
use clap::Parser;
use commands::{List, Simulate};

/// Inspect and simulate budding crystal formations
#[derive(Parser)]
#[command(name = "crystal-cli")]
#[command(about = "Budding crystal growth tools", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List registered formations
    List(List),

    /// Run random ticks over a field of budding sources
    Simulate(Simulate),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for CRYSTAL_DATA_DIR and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::List(cmd) => cmd.execute(),
        Command::Simulate(cmd) => cmd.execute(),
    }
}
