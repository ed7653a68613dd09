//! Command-line interface for strictly_match.

use clap::{Parser, Subcommand};
use strictly_match::ReportFormat;

/// Strictly Match - tic-tac-toe with a scoreboard and round history
#[derive(Parser, Debug)]
#[command(name = "strictly_match")]
#[command(about = "Two-player tic-tac-toe match in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(long, global = true, default_value = "strictly_match.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a match in the terminal UI
    Play,

    /// Apply a scripted sequence of actions and print the resulting match
    Replay {
        /// Comma-separated actions: cell index 0-8 or label, `next`, `reset`
        moves: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
}
