//! Alternating turn invariant: the turn passes unless the game ended.

use super::{Invariant, Transition};

/// Invariant: Turn passes to the opponent after a non-final move.
///
/// When the move ends the game the turn stays with the mover.
pub struct AlternatingTurnInvariant;

impl<'a> Invariant<Transition<'a>> for AlternatingTurnInvariant {
    fn holds(t: &Transition<'a>) -> bool {
        let mover = t.before.current_player();
        let expected_next = if t.after.status().is_over() {
            mover
        } else {
            mover.opponent()
        };
        !t.before.status().is_over() && t.after.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...) until the game ends"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, Player, Position};

    #[test]
    fn test_single_move_holds() {
        let before = GameState::new();
        let after = before.advance(Position::Center).unwrap();
        assert_eq!(after.current_player(), Player::O);
        assert!(AlternatingTurnInvariant::holds(&Transition::new(
            &before,
            &after,
            Position::Center
        )));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let before = GameState::new();
        let mut after = before.advance(Position::Center).unwrap();
        after.current_player = Player::X;
        assert!(!AlternatingTurnInvariant::holds(&Transition::new(
            &before,
            &after,
            Position::Center
        )));
    }

    #[test]
    fn test_winning_move_keeps_turn() {
        let mut before = GameState::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
        ] {
            before = before.advance(pos).unwrap();
        }
        let after = before.advance(Position::TopRight).unwrap();
        assert_eq!(after.current_player(), Player::X);
        assert!(AlternatingTurnInvariant::holds(&Transition::new(
            &before,
            &after,
            Position::TopRight
        )));
    }
}
