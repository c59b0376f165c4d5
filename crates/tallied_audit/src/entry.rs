//! Audit entry types.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Kind of event recorded in the audit trail.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ActionType {
    /// A mark was placed on the board.
    Move,
    /// The board was cleared.
    Reset,
    /// An internal fault was caught and contained.
    Error,
}

/// A single immutable record in the audit trail.
///
/// Entries are only created by [`AuditLog::append`](crate::AuditLog::append),
/// which stamps them with the time of insertion.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AuditEntry<M> {
    /// When the event was recorded (serialized as RFC 3339).
    timestamp: DateTime<Utc>,
    /// Who caused the event.
    actor: String,
    /// What kind of event this is.
    action: ActionType,
    /// Event-specific context.
    metadata: M,
}

impl<M> AuditEntry<M> {
    pub(crate) fn new(
        timestamp: DateTime<Utc>,
        actor: String,
        action: ActionType,
        metadata: M,
    ) -> Self {
        Self {
            timestamp,
            actor,
            action,
            metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_action_type_display() {
        assert_eq!(ActionType::Move.to_string(), "MOVE");
        assert_eq!(ActionType::Reset.to_string(), "RESET");
        assert_eq!(ActionType::Error.to_string(), "ERROR");
    }

    #[test]
    fn test_action_type_parse_ignores_case() {
        assert_eq!(ActionType::from_str("move"), Ok(ActionType::Move));
        assert_eq!(ActionType::from_str("RESET"), Ok(ActionType::Reset));
        assert!(ActionType::from_str("undo").is_err());
    }

    #[test]
    fn test_action_type_serializes_upper_case() {
        let json = serde_json::to_string(&ActionType::Error).unwrap();
        assert_eq!(json, "\"ERROR\"");
    }
}
