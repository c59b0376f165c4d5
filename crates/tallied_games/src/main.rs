//! Tallied Games - command-line entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tallied_games::cli::{Cli, Command};
use tallied_games::{render, session};
use tallied_tictactoe::{EngineConfig, GameEngine};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config)?;

    match cli.command {
        Command::Play => run_play(config),
        Command::Replay { moves, json } => run_replay(config, moves, json),
        Command::Config => run_config(config),
    }
}

/// Loads the engine config from `path`, or the defaults when none is given.
#[instrument]
fn load_config(path: Option<PathBuf>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(EngineConfig::default()),
    }
}

/// Play interactively on stdin
fn run_play(config: EngineConfig) -> Result<()> {
    info!("Starting interactive play");
    let mut engine = GameEngine::with_config(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session::play(&mut engine, stdin.lock(), &mut stdout)
}

/// Apply a scripted sequence and print the result
fn run_replay(config: EngineConfig, moves: Vec<String>, json: bool) -> Result<()> {
    let result = session::replay(GameEngine::with_config(config), &moves);
    let mut stdout = io::stdout();

    if json {
        let skipped: Vec<_> = result
            .skipped
            .iter()
            .map(|(step, reason)| serde_json::json!({ "step": step, "reason": reason }))
            .collect();
        let report = serde_json::json!({
            "game": result.engine.snapshot(),
            "skipped": skipped,
            "audit": result.engine.audit_trail(),
        });
        writeln!(stdout, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    let snapshot = result.engine.snapshot();
    writeln!(stdout, "{}", render::board(snapshot.board()))?;
    writeln!(stdout, "{}", render::status(&snapshot))?;
    writeln!(stdout, "{}", render::scores(snapshot.scores()))?;
    for (step, reason) in &result.skipped {
        writeln!(stdout, "skipped {}: {}", step, reason)?;
    }
    writeln!(stdout)?;
    writeln!(stdout, "{}", render::audit(&result.engine.audit_trail()))?;
    Ok(())
}

/// Print the effective configuration as TOML
fn run_config(config: EngineConfig) -> Result<()> {
    let toml = config.to_toml().context("Failed to serialize config")?;
    print!("{}", toml);
    Ok(())
}
