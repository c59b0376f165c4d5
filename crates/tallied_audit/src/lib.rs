//! Tallied Audit - append-only audit trail
//!
//! An in-memory, newest-first record of timestamped events. The log holds
//! no business rules: callers decide what an event means and what context
//! travels with it as metadata.
//!
//! # Example
//!
//! ```
//! use tallied_audit::{ActionType, AuditLog};
//!
//! let mut log = AuditLog::new();
//! log.append("system", ActionType::Reset, "new round");
//! log.append("playerX", ActionType::Move, "center");
//!
//! let entries = log.entries();
//! assert_eq!(entries[0].actor(), "playerX");
//! assert_eq!(entries[1].action(), &ActionType::Reset);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod entry;
mod error;
mod log;

pub use entry::{ActionType, AuditEntry};
pub use error::AuditError;
pub use log::AuditLog;
