//! Single mark invariant: a move changes exactly one square.

use super::{Invariant, Transition};
use crate::Square;

/// Invariant: A move turns exactly one empty square into the mover's mark.
///
/// The changed square must be the one the move named, and it must now hold
/// the mark of the player whose turn it was.
pub struct SingleMarkInvariant;

impl<'a> Invariant<Transition<'a>> for SingleMarkInvariant {
    fn holds(t: &Transition<'a>) -> bool {
        let mover = t.before.current_player();
        t.before.board().diff(t.after.board()) == [t.position]
            && t.before.board().get(t.position) == Square::Empty
            && t.after.board().get(t.position) == Square::Occupied(mover)
    }

    fn description() -> &'static str {
        "A move marks exactly one previously empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, Player, Position};

    #[test]
    fn test_legal_move_holds() {
        let before = GameState::new();
        let after = before.advance(Position::BottomCenter).unwrap();
        assert!(SingleMarkInvariant::holds(&Transition::new(
            &before,
            &after,
            Position::BottomCenter
        )));
    }

    #[test]
    fn test_wrong_position_violates() {
        let before = GameState::new();
        let after = before.advance(Position::BottomCenter).unwrap();
        assert!(!SingleMarkInvariant::holds(&Transition::new(
            &before,
            &after,
            Position::Center
        )));
    }

    #[test]
    fn test_wrong_mark_violates() {
        let before = GameState::new();
        let mut after = before.clone();
        after.board.place(Position::Center, Player::O).unwrap();
        assert!(!SingleMarkInvariant::holds(&Transition::new(
            &before,
            &after,
            Position::Center
        )));
    }

    #[test]
    fn test_no_change_violates() {
        let before = GameState::new();
        assert!(!SingleMarkInvariant::holds(&Transition::new(
            &before,
            &before,
            Position::Center
        )));
    }
}
