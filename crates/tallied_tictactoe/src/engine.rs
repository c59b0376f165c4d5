//! Tic-tac-toe engine with session scoring and an audit trail.
//!
//! The engine owns the board, the turn, the game status and the scoreboard.
//! Every accepted move and every reset writes exactly one audit entry.
//! Rejected moves write nothing. Internal faults are contained: they are
//! recorded as an `ERROR` entry and the move is reported as rejected.

use crate::invariants::{InvariantSet, MoveInvariants, Transition};
use crate::{
    Board, EngineConfig, EngineError, EngineErrorKind, GameMetadata, GameState, GameStatus, Player,
    Position, Scoreboard,
};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tallied_audit::{AuditEntry, AuditLog};
use tracing::{debug, info, instrument, warn};

/// Owned copy of everything a caller needs to render the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The board.
    board: Board,
    /// Player to move next.
    #[getter(copy)]
    current_player: Player,
    /// Game status.
    #[getter(copy)]
    status: GameStatus,
    /// Session scores.
    scores: Scoreboard,
    /// Positions played since the last reset.
    history: Vec<Position>,
}

/// Tic-tac-toe engine.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
    scores: Scoreboard,
    audit: AuditLog<GameMetadata>,
    config: EngineConfig,
}

impl GameEngine {
    /// Creates an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with the given configuration.
    #[instrument(skip(config), fields(system_actor = %config.system_actor()))]
    pub fn with_config(config: EngineConfig) -> Self {
        debug!("Creating game engine");
        Self {
            config,
            ..Self::default()
        }
    }

    /// Whether `index` names a square the current player may mark.
    ///
    /// False when the game is over, when `index` is outside 0-8, or when the
    /// square is taken. Never records anything.
    pub fn validate_move(&self, index: i64) -> bool {
        self.playable(index).is_some()
    }

    fn playable(&self, index: i64) -> Option<Position> {
        if self.state.status.is_over() {
            return None;
        }
        Position::from_signed(index).filter(|pos| self.state.board.is_empty(*pos))
    }

    /// Marks `index` for the current player.
    ///
    /// Returns `true` when the move was applied. Illegal moves return `false`
    /// and leave no trace. A fault while applying a legal move is recorded
    /// as an `ERROR` entry and also returns `false`; state is unchanged.
    #[instrument(skip(self), fields(player = %self.state.current_player))]
    pub fn make_move(&mut self, index: i64) -> bool {
        let Some(position) = self.playable(index) else {
            debug!(status = %self.state.status, "Rejected move");
            return false;
        };

        self.apply(position, GameState::advance)
    }

    /// Runs `step` as the transition for `position` and either commits the
    /// result or records the fault.
    fn apply(
        &mut self,
        position: Position,
        step: impl FnOnce(&GameState, Position) -> Result<GameState, EngineError>,
    ) -> bool {
        let mover = self.state.current_player;
        match self.transition(position, step) {
            Ok(next) => {
                self.commit(position, mover, next);
                true
            }
            Err(err) => {
                warn!(error = %err, "Contained fault while applying move");
                let actor = self.config.system_actor().clone();
                self.record(
                    actor,
                    GameMetadata::Error {
                        message: err.to_string(),
                    },
                );
                false
            }
        }
    }

    /// Computes and checks the next state without touching `self`.
    fn transition(
        &self,
        position: Position,
        step: impl FnOnce(&GameState, Position) -> Result<GameState, EngineError>,
    ) -> Result<GameState, EngineError> {
        let before = &self.state;
        let next = contain(|| step(before, position))?;

        let transition = Transition::new(before, &next, position);
        MoveInvariants::check_all(&transition).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            EngineError::new(EngineErrorKind::InvariantViolation(descriptions))
        })?;

        Ok(next)
    }

    fn commit(&mut self, position: Position, mover: Player, next: GameState) {
        let board_before = self.state.board;
        self.state = next;

        let status = self.state.status;
        if status.is_over() {
            self.scores.record(status);
            info!(%status, scores = ?self.scores, "Game finished");
        }
        info!(%position, "Move applied");

        let actor = self.config.player_actor(mover);
        let board_after = self.state.board;
        self.record(
            actor,
            GameMetadata::Move {
                index: position.to_index(),
                board_before,
                board_after,
            },
        );
    }

    /// Clears the board and gives the first move to X.
    ///
    /// Scores are kept. An absent or empty `reason` records the configured
    /// default.
    #[instrument(skip(self))]
    pub fn reset(&mut self, reason: Option<&str>) {
        let reason = reason
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.config.default_reset_reason().clone());

        let board_before = self.state.board;
        self.state = GameState::new();
        info!(%reason, "Game reset");

        let actor = self.config.system_actor().clone();
        let board_after = self.state.board;
        self.record(
            actor,
            GameMetadata::Reset {
                reason,
                board_before,
                board_after,
            },
        );
    }

    fn record(&mut self, actor: String, metadata: GameMetadata) {
        let action = metadata.action();
        self.audit.append(actor, action, metadata);
    }

    /// Returns a copy of the board.
    pub fn board(&self) -> Board {
        self.state.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.state.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.state.status.is_over()
    }

    /// Returns a copy of the session scores.
    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    /// Positions played since the last reset.
    pub fn history(&self) -> &[Position] {
        &self.state.history
    }

    /// Squares the current player may mark. Empty once the game is over.
    pub fn available_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.state.board)
        }
    }

    /// Returns an owned snapshot of the game.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.state.board,
            current_player: self.state.current_player,
            status: self.state.status,
            scores: self.scores,
            history: self.state.history.clone(),
        }
    }

    /// Returns the audit trail, newest first.
    pub fn audit_trail(&self) -> Vec<AuditEntry<GameMetadata>> {
        self.audit.entries()
    }

    /// Read-only access to the audit log.
    pub fn audit_log(&self) -> &AuditLog<GameMetadata> {
        &self.audit
    }

    /// Discards the audit trail. Meant for administrative use only.
    #[instrument(skip(self))]
    pub fn clear_audit_trail(&mut self) {
        self.audit.clear();
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

/// Turns a panic inside `f` into an [`EngineErrorKind::Panicked`] error.
fn contain(f: impl FnOnce() -> Result<GameState, EngineError>) -> Result<GameState, EngineError> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        EngineError::new(EngineErrorKind::Panicked(panic_message(payload.as_ref())))
    })?
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
