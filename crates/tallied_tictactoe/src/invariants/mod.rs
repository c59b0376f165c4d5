//! First-class invariants for tic-tac-toe transitions.
//!
//! Every accepted move is checked against these before it is committed.
//! A violation means the engine itself is broken, never that the player
//! made an illegal move, so it is treated as an internal fault.

mod alternating_turn;
mod balanced_marks;
mod single_mark;
mod status_matches_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use balanced_marks::BalancedMarksInvariant;
pub use single_mark::SingleMarkInvariant;
pub use status_matches_board::StatusMatchesBoardInvariant;

use crate::{GameState, Position};
use derive_new::new;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>),+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1);
impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// One move: the state before, the state after, and the square marked.
#[derive(Debug, Clone, Copy, new)]
pub struct Transition<'a> {
    /// State before the move.
    pub before: &'a GameState,
    /// State after the move.
    pub after: &'a GameState,
    /// Square the mover marked.
    pub position: Position,
}

/// Everything a committed move must satisfy.
pub type MoveInvariants = (
    SingleMarkInvariant,
    AlternatingTurnInvariant,
    BalancedMarksInvariant,
    StatusMatchesBoardInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    #[test]
    fn test_invariant_set_holds_for_legal_move() {
        let before = GameState::new();
        let after = before.advance(Position::Center).unwrap();
        let transition = Transition::new(&before, &after, Position::Center);
        assert!(MoveInvariants::check_all(&transition).is_ok());
    }

    #[test]
    fn test_invariant_set_collects_every_violation() {
        let before = GameState::new();
        let mut after = before.advance(Position::Center).unwrap();
        // Extra O mark with no move behind it.
        after.board.place(Position::TopLeft, Player::O).unwrap();
        after.current_player = Player::X;

        let transition = Transition::new(&before, &after, Position::Center);
        let violations = MoveInvariants::check_all(&transition).unwrap_err();
        assert_eq!(violations.len(), 3);
        let single_mark = <SingleMarkInvariant as Invariant<Transition<'_>>>::description();
        assert!(violations.iter().any(|v| v.description == single_mark));
        assert_eq!(after.board.get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (SingleMarkInvariant, AlternatingTurnInvariant);
        let before = GameState::new();
        let after = before.advance(Position::TopLeft).unwrap();
        let transition = Transition::new(&before, &after, Position::TopLeft);
        assert!(TwoInvariants::check_all(&transition).is_ok());
    }
}
