//! Parsing of typed commands into engine calls.

use derive_more::{Display, Error};
use std::str::FromStr;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Mark a cell by flat index. Range is checked by the engine.
    Move(i64),
    /// Clear the board, optionally with a reason.
    Reset(Option<String>),
    /// Show the board.
    Board,
    /// Show the scoreboard.
    Scores,
    /// Show the audit trail as text.
    Audit,
    /// Show the audit trail as JSON.
    AuditJson,
    /// Discard the audit trail.
    ClearAudit,
    /// Show available commands.
    Help,
    /// Leave the session.
    Quit,
}

/// Why a line could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Nothing was typed.
    #[display("Enter a command (type `help` for a list)")]
    Empty,
    /// Grid coordinates outside the 3x3 grid.
    #[display(
        "Coordinates {},{} are off the board (rows and columns are 0-2)",
        _0,
        _1
    )]
    OffGrid(i64, i64),
    /// Anything else.
    #[display("Unknown command: {}", _0)]
    Unknown(#[error(not(source))] String),
}

/// Translates a grid position to the engine's row-major index.
pub fn cell_index(row: i64, col: i64) -> Option<i64> {
    if (0..3).contains(&row) && (0..3).contains(&col) {
        Some(row * 3 + col)
    } else {
        None
    }
}

impl FromStr for Input {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        if line.is_empty() {
            return Err(InputError::Empty);
        }

        if let Ok(index) = line.parse::<i64>() {
            return Ok(Input::Move(index));
        }

        if let Some((row, col)) = line.split_once(',')
            && let (Ok(row), Ok(col)) = (row.trim().parse::<i64>(), col.trim().parse::<i64>())
        {
            return cell_index(row, col)
                .map(Input::Move)
                .ok_or(InputError::OffGrid(row, col));
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match (word.to_lowercase().as_str(), rest) {
            ("reset" | "r", "") => Ok(Input::Reset(None)),
            ("reset" | "r", reason) => Ok(Input::Reset(Some(reason.to_string()))),
            ("board" | "b", "") => Ok(Input::Board),
            ("scores" | "s", "") => Ok(Input::Scores),
            ("audit" | "a", "") => Ok(Input::Audit),
            ("audit" | "a", "json") => Ok(Input::AuditJson),
            ("clear-audit", "") => Ok(Input::ClearAudit),
            ("help" | "h" | "?", "") => Ok(Input::Help),
            ("quit" | "q" | "exit", "") => Ok(Input::Quit),
            _ => Err(InputError::Unknown(line.to_string())),
        }
    }
}
