//! Strictly Match - unified CLI.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_match::{MatchConfig, ReportFormat, logging, parse_script, render, run_script, tui};
use strictly_tictactoe::GameEngine;
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = MatchConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => tui::run_tui(&config),
        Command::Replay { moves, format } => run_replay(&config, &moves, format),
    }
}

/// Run a scripted match and print the result
#[instrument(skip(config))]
fn run_replay(config: &MatchConfig, moves: &str, format: ReportFormat) -> Result<()> {
    logging::init_stderr_logging(config);

    let actions = parse_script(moves).context("Invalid replay script")?;
    let mut engine = GameEngine::new();
    run_script(&mut engine, &actions);
    info!(
        round = engine.round(),
        finished_rounds = engine.history().len(),
        "Replay complete"
    );

    let report = render(&engine, format, *config.history_limit())
        .context("Failed to render match")?;
    println!("{}", report);
    Ok(())
}
