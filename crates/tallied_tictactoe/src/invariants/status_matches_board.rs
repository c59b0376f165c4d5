//! Status invariant: the outcome is a pure function of the board.

use super::{Invariant, Transition};
use crate::rules;

/// Invariant: The recorded status equals the status the board implies.
pub struct StatusMatchesBoardInvariant;

impl<'a> Invariant<Transition<'a>> for StatusMatchesBoardInvariant {
    fn holds(t: &Transition<'a>) -> bool {
        t.after.status() == rules::evaluate(t.after.board())
    }

    fn description() -> &'static str {
        "Game status matches the board"
    }
}
