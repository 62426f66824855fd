//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes, the in-memory ledger, and
//! the guard that saves it on exit.

pub mod file_io;
pub mod guard;
pub mod ledger;

pub use file_io::{read_json_optional, write_json_atomic};
pub use guard::{lock_ledger, save_and_report, LedgerGuard, INTERRUPTED_EXIT_CODE};
pub use ledger::{Ledger, LoadStatus};
