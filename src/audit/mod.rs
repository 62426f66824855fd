//! Audit logging for the expense tracker
//!
//! Records every expense added and every export written in an append-only
//! log, one JSON object per line (JSONL). The log is optional and only
//! written when a path is configured.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new("audit.log");
//! logger.log(&AuditEntry::create(&expense))?;
//! logger.log(&AuditEntry::export("expenses.csv", 12))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
