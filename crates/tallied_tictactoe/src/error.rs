//! Engine error types.

use crate::Position;
use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong inside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EngineErrorKind {
    /// A mark was placed on a square that already holds one.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// A transition broke one or more game invariants.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),

    /// Computing a transition panicked.
    #[display("Transition panicked: {}", _0)]
    Panicked(String),
}

/// Internal engine fault with location tracking.
///
/// These never cross the [`GameEngine`](crate::GameEngine) boundary as
/// errors: the engine records them in the audit trail and reports the move
/// as rejected.
#[derive(Debug, Clone, Display, Error)]
#[display("Engine error: {} at {}:{}", kind, file, line)]
pub struct EngineError {
    /// Error kind.
    pub kind: EngineErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: EngineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
