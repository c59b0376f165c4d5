//! Balanced marks invariant: mark counts follow from who moved.

use super::{Invariant, Transition};
use crate::Player;

/// Invariant: X moves first, so after X moves X leads O by one and after O
/// moves the counts are equal. History length matches the marks on the board.
pub struct BalancedMarksInvariant;

impl<'a> Invariant<Transition<'a>> for BalancedMarksInvariant {
    fn holds(t: &Transition<'a>) -> bool {
        let board = t.after.board();
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        let balanced = match t.before.current_player() {
            Player::X => x == o + 1,
            Player::O => x == o,
        };
        balanced && t.after.history().len() == board.occupied()
    }

    fn description() -> &'static str {
        "Mark counts and history length agree with alternating play"
    }
}
