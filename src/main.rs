//! Strictly Connect Four - console entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use strictly_connect_four::{GameConfig, StdConsole, run};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(cli.log_filter.as_deref());

    let config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("Invalid configuration in {}", cli.config.display()))?;

    play(&config)
}

#[instrument(skip(config))]
fn play(config: &GameConfig) -> Result<()> {
    info!("Starting Connect Four");
    let mut console = StdConsole::stdio();
    let session = run(&mut console, config)?;
    info!(
        played = session.outcomes().len(),
        planned = session.mode().games(),
        "Session finished"
    );
    Ok(())
}

/// Logs go to stderr so the game transcript on stdout stays clean.
fn initialize_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
