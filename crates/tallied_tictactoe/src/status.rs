//! Game outcome and session scoreboard.

use crate::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Player {} wins", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Cumulative results for a session.
///
/// Counters only ever go up. Resetting the board leaves them alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Games won by X.
    #[getter(copy)]
    x_wins: u32,
    /// Games won by O.
    #[getter(copy)]
    o_wins: u32,
    /// Games drawn.
    #[getter(copy)]
    draws: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins credited to a player.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Number of finished games.
    pub fn games(&self) -> u32 {
        self.x_wins
            .saturating_add(self.o_wins)
            .saturating_add(self.draws)
    }

    /// Credits a finished game. In-progress status is ignored.
    pub(crate) fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::InProgress => {}
            GameStatus::Won(Player::X) => self.x_wins = self.x_wins.saturating_add(1),
            GameStatus::Won(Player::O) => self.o_wins = self.o_wins.saturating_add(1),
            GameStatus::Draw => self.draws = self.draws.saturating_add(1),
        }
    }
}
