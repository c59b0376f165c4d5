//! Append-only audit log.

use crate::{ActionType, AuditEntry, AuditError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use tracing::{debug, info, instrument};

/// In-memory audit trail, newest entry first.
///
/// The log never rewrites or removes individual entries. The only way to
/// shrink it is [`AuditLog::clear`], which drops everything at once.
/// There is no retention limit; the log lives as long as its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLog<M> {
    /// Entries with the most recent at the front.
    entries: VecDeque<AuditEntry<M>>,
}

impl<M> Default for AuditLog<M> {
    fn default() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }
}

impl<M> AuditLog<M> {
    /// Creates an empty audit log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an event, stamped with the current time.
    ///
    /// Timestamps never run backwards: if the wall clock reads earlier than
    /// the newest entry, the newest entry's timestamp is reused.
    #[instrument(skip_all, fields(action = %action))]
    pub fn append(&mut self, actor: impl Into<String>, action: ActionType, metadata: M) {
        let actor = actor.into();
        let timestamp = self.next_timestamp(Utc::now());
        debug!(actor = %actor, %timestamp, "Appending audit entry");
        self.entries
            .push_front(AuditEntry::new(timestamp, actor, action, metadata));
    }

    fn next_timestamp(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self.entries.front() {
            Some(newest) if *newest.timestamp() > now => *newest.timestamp(),
            _ => now,
        }
    }

    /// Returns the most recent entry.
    pub fn latest(&self) -> Option<&AuditEntry<M>> {
        self.entries.front()
    }

    /// Iterates over entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &AuditEntry<M>> {
        self.entries.iter()
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discards every entry.
    ///
    /// Meant for administrative use. Access control is the caller's job.
    #[instrument(skip(self), fields(discarded = self.entries.len()))]
    pub fn clear(&mut self) {
        info!("Clearing audit log");
        self.entries.clear();
    }
}

impl<M: Clone> AuditLog<M> {
    /// Returns an owned snapshot of all entries, newest first.
    pub fn entries(&self) -> Vec<AuditEntry<M>> {
        self.entries.iter().cloned().collect()
    }

    /// Returns entries of one kind, newest first.
    pub fn entries_of(&self, action: ActionType) -> Vec<AuditEntry<M>> {
        self.entries
            .iter()
            .filter(|entry| *entry.action() == action)
            .cloned()
            .collect()
    }
}

impl<M: Serialize> AuditLog<M> {
    /// Exports the trail as a pretty-printed JSON array, newest first.
    #[instrument(skip(self), fields(entries = self.entries.len()))]
    pub fn to_json(&self) -> Result<String, AuditError> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        Ok(json)
    }
}
