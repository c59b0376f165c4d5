//! Game state and single-move transitions.

use crate::{Board, EngineError, GameStatus, Player, Position, rules};
use serde::{Deserialize, Serialize};

/// Board, turn, status and the moves made since the last reset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    pub(crate) board: Board,
    /// Current player to move.
    pub(crate) current_player: Player,
    /// Game status.
    pub(crate) status: GameStatus,
    /// Move history (positions played).
    pub(crate) history: Vec<Position>,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Computes the state after the current player marks `pos`.
    ///
    /// The receiver is left untouched. The turn passes to the opponent only
    /// while the game is still in progress.
    #[track_caller]
    pub fn advance(&self, pos: Position) -> Result<GameState, EngineError> {
        let mover = self.current_player;
        let mut next = self.clone();
        next.board.place(pos, mover)?;
        next.history.push(pos);
        next.status = rules::evaluate(&next.board);
        if !next.status.is_over() {
            next.current_player = mover.opponent();
        }
        Ok(next)
    }
}
