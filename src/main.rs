//! noughts - unified CLI
//!
//! Interactive terminal tic-tac-toe and headless position analysis.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use noughts::{AppConfig, run_tui, suggest};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play { mode: None }) {
        Command::Play { mode } => run_play(&cli.config, mode.map(Into::into)),
        Command::Suggest { board, json } => run_suggest(&board, json),
    }
}

/// Run the terminal UI
fn run_play(config_path: &std::path::Path, mode: Option<noughts::Mode>) -> Result<()> {
    let mut config = AppConfig::load_or_default(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    if let Some(mode) = mode {
        config = config.with_mode(mode);
    }
    run_tui(&config)
}

/// Print the analysis of one position
fn run_suggest(board: &str, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Analyzing position");
    let suggestion = suggest(board)?;
    debug!(?suggestion, "Analysis complete");

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestion)?);
    } else {
        print!("{}", suggestion);
    }
    Ok(())
}
