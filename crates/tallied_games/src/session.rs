//! Interactive play and scripted replay against one engine.

use crate::input::Input;
use crate::render;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tallied_tictactoe::GameEngine;
use tracing::{debug, info, instrument, warn};

const HELP: &str = "\
Commands:
  0-8            mark a cell by index
  row,col        mark a cell by grid position (0-2 each)
  reset [why]    clear the board, keep the scores
  board          show the board
  scores         show the scoreboard
  audit [json]   show the audit trail, newest first
  clear-audit    discard the audit trail
  help           show this list
  quit           leave";

/// What happened to one attempted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied.
    Applied,
    /// The move was illegal and left no trace.
    Rejected,
    /// The move was legal but an internal fault stopped it; an error entry
    /// was recorded.
    Faulted,
}

/// Attempts a move and classifies the result by watching the audit trail.
pub fn attempt(engine: &mut GameEngine, index: i64) -> MoveOutcome {
    let recorded = engine.audit_log().len();
    if engine.make_move(index) {
        MoveOutcome::Applied
    } else if engine.audit_log().len() > recorded {
        MoveOutcome::Faulted
    } else {
        MoveOutcome::Rejected
    }
}

/// Runs a read-eval-print loop until `quit` or end of input.
#[instrument(skip_all)]
pub fn play<R: BufRead, W: Write>(engine: &mut GameEngine, input: R, output: &mut W) -> Result<()> {
    info!("Starting interactive session");
    writeln!(output, "{}", render::board(&engine.board()))?;
    writeln!(output, "{}", render::status(&engine.snapshot()))?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}> ", render::mark_icon(engine.current_player()))?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line.context("Failed to read input")?;

        let command = match line.parse::<Input>() {
            Ok(command) => command,
            Err(e) => {
                debug!(error = %e, "Unparsed input");
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        if command == Input::Quit {
            break;
        }
        respond(engine, command, output)?;
    }

    writeln!(output, "Final scores: {}", render::scores(&engine.scores()))?;
    info!(scores = ?engine.scores(), "Session ended");
    Ok(())
}

fn respond<W: Write>(engine: &mut GameEngine, command: Input, output: &mut W) -> Result<()> {
    match command {
        Input::Move(index) => match attempt(engine, index) {
            MoveOutcome::Applied => {
                writeln!(output, "{}", render::board(&engine.board()))?;
                writeln!(output, "{}", render::status(&engine.snapshot()))?;
                if engine.is_over() {
                    writeln!(output, "{}", render::scores(&engine.scores()))?;
                    writeln!(output, "Type `reset` to play again.")?;
                }
            }
            MoveOutcome::Rejected if engine.is_over() => {
                writeln!(output, "The game is over. Type `reset` to play again.")?;
            }
            MoveOutcome::Rejected => {
                writeln!(output, "Cell {} is not available.", index)?;
            }
            MoveOutcome::Faulted => {
                warn!(index, "Move hit an internal fault");
                writeln!(output, "That move could not be applied; see `audit`.")?;
            }
        },
        Input::Reset(reason) => {
            engine.reset(reason.as_deref());
            writeln!(output, "{}", render::board(&engine.board()))?;
            writeln!(output, "{}", render::status(&engine.snapshot()))?;
        }
        Input::Board => {
            writeln!(output, "{}", render::board(&engine.board()))?;
            writeln!(output, "{}", render::status(&engine.snapshot()))?;
        }
        Input::Scores => writeln!(output, "{}", render::scores(&engine.scores()))?,
        Input::Audit => {
            let trail = engine.audit_trail();
            if trail.is_empty() {
                writeln!(output, "Audit trail is empty.")?;
            } else {
                writeln!(output, "{}", render::audit(&trail))?;
            }
        }
        Input::AuditJson => {
            let json = engine.audit_log().to_json()?;
            writeln!(output, "{}", json)?;
        }
        Input::ClearAudit => {
            engine.clear_audit_trail();
            writeln!(output, "Audit trail cleared.")?;
        }
        Input::Help => writeln!(output, "{}", HELP)?,
        Input::Quit => {}
    }
    Ok(())
}

/// Result of replaying a scripted sequence.
#[derive(Debug, Clone)]
pub struct Replay {
    /// Engine after every step was applied.
    pub engine: GameEngine,
    /// Steps that were not applied, in order, with the reason.
    pub skipped: Vec<(String, String)>,
}

/// Applies `steps` in order to `engine`.
///
/// A step is a cell index or `reset` with an optional reason. Illegal moves
/// and anything else are skipped and reported.
#[instrument(skip_all, fields(steps = steps.len()))]
pub fn replay(mut engine: GameEngine, steps: &[String]) -> Replay {
    let mut skipped = Vec::new();
    for step in steps {
        match step.parse::<Input>() {
            Ok(Input::Move(index)) => {
                let reason = match attempt(&mut engine, index) {
                    MoveOutcome::Applied => continue,
                    MoveOutcome::Rejected => "illegal move",
                    MoveOutcome::Faulted => "internal fault",
                };
                skipped.push((step.clone(), reason.to_string()));
            }
            Ok(Input::Reset(reason)) => engine.reset(reason.as_deref()),
            Ok(_) => skipped.push((step.clone(), "not a replay step".to_string())),
            Err(e) => skipped.push((step.clone(), e.to_string())),
        }
    }
    debug!(skipped = skipped.len(), "Replay finished");
    Replay { engine, skipped }
}
