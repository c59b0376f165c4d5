//! Audit error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Audit error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Audit error: {} at {}:{}", message, file, line)]
pub struct AuditError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl AuditError {
    /// Creates a new audit error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<serde_json::Error> for AuditError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Serialization error: {}", err))
    }
}
