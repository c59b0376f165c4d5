//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. The outcome of a game depends only on
//! the marks on the board, never on how they got there.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};

use crate::{Board, GameStatus};

/// Evaluates the status implied by a board.
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
