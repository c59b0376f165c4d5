//! Context recorded with each audit entry.

use crate::Board;
use serde::{Deserialize, Serialize};
use tallied_audit::ActionType;

/// What the engine records alongside each audit entry.
///
/// Serialized untagged; the entry's action names the variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GameMetadata {
    /// A mark was placed.
    Move {
        /// Board index (0-8) that was marked.
        index: usize,
        /// Board before the move.
        board_before: Board,
        /// Board after the move.
        board_after: Board,
    },
    /// The board was cleared.
    Reset {
        /// Why the reset happened.
        reason: String,
        /// Board before the reset.
        board_before: Board,
        /// Board after the reset (always empty).
        board_after: Board,
    },
    /// A fault was contained while applying a move.
    Error {
        /// Description of the fault.
        message: String,
    },
}

impl GameMetadata {
    /// The audit action this metadata belongs to.
    pub fn action(&self) -> ActionType {
        match self {
            GameMetadata::Move { .. } => ActionType::Move,
            GameMetadata::Reset { .. } => ActionType::Reset,
            GameMetadata::Error { .. } => ActionType::Error,
        }
    }

    /// Board before the event, for moves and resets.
    pub fn board_before(&self) -> Option<&Board> {
        match self {
            GameMetadata::Move { board_before, .. } | GameMetadata::Reset { board_before, .. } => {
                Some(board_before)
            }
            GameMetadata::Error { .. } => None,
        }
    }

    /// Board after the event, for moves and resets.
    pub fn board_after(&self) -> Option<&Board> {
        match self {
            GameMetadata::Move { board_after, .. } | GameMetadata::Reset { board_after, .. } => {
                Some(board_after)
            }
            GameMetadata::Error { .. } => None,
        }
    }
}
