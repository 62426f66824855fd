//! Expense Tracker - a terminal-based personal expense ledger
//!
//! This library provides the core functionality for the `expenses` binary:
//! an append-only ledger of expenses kept in a JSON file, a monthly summary
//! report, and CSV export, driven from an interactive menu.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Ledger and audit log path resolution
//! - `error`: Custom error types
//! - `models`: The expense record and input parsing
//! - `storage`: JSON file storage, the ledger, and the save-on-exit guard
//! - `services`: Validate-then-append logic for new expenses
//! - `reports`: Monthly summary
//! - `export`: CSV export
//! - `audit`: Optional audit log
//! - `cli`: Console I/O and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::LedgerPaths;
//! use expense_tracker::storage::{Ledger, LedgerGuard};
//!
//! let paths = LedgerPaths::resolve(None, None);
//! let (ledger, status) = Ledger::load(paths.ledger_file())?;
//! let guard = LedgerGuard::new(ledger);
//! guard.save_on_interrupt()?;
//! expense_tracker::cli::run(guard, status, &paths, std::io::stdin().lock(), std::io::stdout())?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
