//! Offline checker for EasyFarm ability lists.
//!
//! Loads a scenario (one resource snapshot plus one ability list) and runs it
//! through the same filter the decision loop uses.

mod commands;
mod scenario;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use commands::{Check, Lint, Select};

/// Check ability lists against recorded snapshots
#[derive(Parser)]
#[command(name = "farm")]
#[command(about = "Action filter tools for EasyFarm ability lists", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Show the verdict for every ability
    Check(Check),

    /// Print the ability that would be used
    Select(Select),

    /// Report reversed or out-of-range settings
    Lint(Lint),
}

fn main() -> Result<ExitCode> {
    // Load .env file if it exists (for FARM_SCENARIO and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let passed = match cli.command {
        Command::Check(cmd) => cmd.execute()?,
        Command::Select(cmd) => cmd.execute()?,
        Command::Lint(cmd) => cmd.execute()?,
    };

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
