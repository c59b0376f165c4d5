//! Tallied Tic-Tac-Toe - game engine with scoring and an audit trail
//!
//! The engine owns the board, the turn, the game status and a session
//! scoreboard. Every accepted move and every reset is recorded in an
//! append-only [`AuditLog`](tallied_audit::AuditLog) with the board before
//! and after, so any game can be reconstructed from its trail.
//!
//! # Example
//!
//! ```
//! use tallied_tictactoe::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     assert!(engine.make_move(index));
//! }
//! assert_eq!(engine.status(), GameStatus::Won(Player::X));
//! assert!(!engine.make_move(5));
//!
//! engine.reset(Some("rematch"));
//! assert_eq!(engine.scores().x_wins(), 1);
//! assert_eq!(engine.audit_trail().len(), 6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod engine;
mod error;
pub mod invariants;
mod metadata;
mod position;
pub mod rules;
mod shared;
mod state;
mod status;
mod types;

pub use config::{ConfigError, EngineConfig};
pub use engine::{GameEngine, GameSnapshot};
pub use error::{EngineError, EngineErrorKind};
pub use metadata::GameMetadata;
pub use position::Position;
pub use shared::SharedGame;
pub use state::GameState;
pub use status::{GameStatus, Scoreboard};
pub use types::{Board, Player, Square};
