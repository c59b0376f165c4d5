//! Tests for the audit log public API.

use serde::{Deserialize, Serialize};
use tallied_audit::{ActionType, AuditEntry, AuditLog};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
enum Note {
    Placed { cell: u8 },
    Cleared { reason: String },
}

#[test]
fn test_entries_newest_first() {
    let mut log = AuditLog::new();
    log.append("playerX", ActionType::Move, Note::Placed { cell: 4 });
    log.append("playerO", ActionType::Move, Note::Placed { cell: 0 });
    log.append(
        "system",
        ActionType::Reset,
        Note::Cleared {
            reason: "rematch".to_string(),
        },
    );

    let entries = log.entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(*entries[0].action(), ActionType::Reset);
    assert_eq!(entries[1].metadata(), &Note::Placed { cell: 0 });
    assert_eq!(entries[2].actor(), "playerX");
    assert_eq!(log.latest(), entries.first());
}

#[test]
fn test_iter_matches_entries() {
    let mut log = AuditLog::new();
    log.append("a", ActionType::Move, Note::Placed { cell: 1 });
    log.append("b", ActionType::Move, Note::Placed { cell: 2 });

    let actors: Vec<&str> = log.iter().map(|e| e.actor().as_str()).collect();
    assert_eq!(actors, vec!["b", "a"]);
}

#[test]
fn test_json_export_round_trips() {
    let mut log = AuditLog::new();
    log.append("playerX", ActionType::Move, Note::Placed { cell: 8 });
    log.append(
        "system",
        ActionType::Reset,
        Note::Cleared {
            reason: "done".to_string(),
        },
    );

    let json = log.to_json().expect("metadata serializes");
    let parsed: Vec<AuditEntry<Note>> = serde_json::from_str(&json).expect("valid json");
    assert_eq!(parsed, log.entries());
    assert!(json.contains("\"RESET\""));
}

#[test]
fn test_timestamp_is_iso_8601() {
    let mut log = AuditLog::new();
    log.append("system", ActionType::Error, Note::Placed { cell: 0 });

    let json = log.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let stamp = value[0]["timestamp"]
        .as_str()
        .expect("timestamp is a string");
    assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
}

#[test]
fn test_clear_then_append() {
    let mut log = AuditLog::new();
    log.append("system", ActionType::Reset, Note::Placed { cell: 0 });
    log.clear();
    assert!(log.is_empty());

    log.append("system", ActionType::Reset, Note::Placed { cell: 1 });
    assert_eq!(log.len(), 1);
}
