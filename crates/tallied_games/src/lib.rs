//! Terminal front end for the tallied tic-tac-toe engine.
//!
//! Parses typed commands, renders the board and the audit trail as text, and
//! drives either an interactive session or a scripted replay.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod input;
pub mod render;
pub mod session;

pub use input::{Input, InputError};
pub use session::{MoveOutcome, Replay, attempt, play, replay};
