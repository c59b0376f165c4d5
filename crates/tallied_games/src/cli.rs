//! Command-line interface for tallied_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tallied Games - tic-tac-toe with a full audit trail
#[derive(Parser, Debug)]
#[command(name = "tallied_games")]
#[command(about = "Tic-tac-toe with scoring and an audit trail", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to an engine config file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin
    Play,

    /// Apply a scripted sequence and print the result
    Replay {
        /// Comma-separated steps: cell indices 0-8 or `reset`
        #[arg(short, long, value_delimiter = ',', required = true)]
        moves: Vec<String>,

        /// Print the final state and audit trail as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}
