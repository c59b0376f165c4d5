//! Thread-safe handle to a single engine.

use crate::{GameEngine, GameMetadata, GameSnapshot};
use std::sync::{Arc, Mutex, MutexGuard};
use tallied_audit::AuditEntry;
use tracing::{instrument, warn};

/// Cloneable handle that serializes every call on one [`GameEngine`].
///
/// Each method holds the lock for its whole duration, so a move's
/// validate-apply-record sequence is never interleaved with another call.
#[derive(Debug, Clone, Default)]
pub struct SharedGame {
    engine: Arc<Mutex<GameEngine>>,
}

impl SharedGame {
    /// Wraps an engine for shared use.
    pub fn new(engine: GameEngine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, GameEngine> {
        // The engine commits a move only after it is fully computed, so the
        // state behind a poisoned lock is still consistent.
        self.engine.lock().unwrap_or_else(|poisoned| {
            warn!("Recovering engine from poisoned lock");
            poisoned.into_inner()
        })
    }

    /// See [`GameEngine::validate_move`].
    pub fn validate_move(&self, index: i64) -> bool {
        self.lock().validate_move(index)
    }

    /// See [`GameEngine::make_move`].
    #[instrument(skip(self))]
    pub fn make_move(&self, index: i64) -> bool {
        self.lock().make_move(index)
    }

    /// See [`GameEngine::reset`].
    #[instrument(skip(self))]
    pub fn reset(&self, reason: Option<&str>) {
        self.lock().reset(reason)
    }

    /// See [`GameEngine::snapshot`].
    pub fn snapshot(&self) -> GameSnapshot {
        self.lock().snapshot()
    }

    /// See [`GameEngine::audit_trail`].
    pub fn audit_trail(&self) -> Vec<AuditEntry<GameMetadata>> {
        self.lock().audit_trail()
    }

    /// Runs `f` with exclusive access to the engine.
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut GameEngine) -> R) -> R {
        let mut engine = self.lock();
        f(&mut engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_one_engine() {
        let game = SharedGame::default();
        let other = game.clone();
        assert!(game.make_move(4));
        assert!(!other.validate_move(4));
        assert_eq!(other.audit_trail().len(), 1);
    }

    #[test]
    fn test_poisoned_lock_is_recovered() {
        let game = SharedGame::default();
        let poisoner = game.clone();
        let result = std::thread::spawn(move || {
            poisoner.with_engine::<()>(|_| panic!("poison the lock"));
        })
        .join();
        assert!(result.is_err());

        assert!(game.make_move(0));
        assert_eq!(game.snapshot().history().len(), 1);
    }
}
