//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! Ledger file:
//! 1. Explicit path (the `--file` flag)
//! 2. `EXPENSES_FILE` environment variable (if set)
//! 3. `expenses.json` in the current directory
//!
//! Audit log:
//! 1. Explicit path (the `--audit-log` flag)
//! 2. `EXPENSES_AUDIT_LOG` environment variable (if set)
//! 3. Disabled

use std::path::{Path, PathBuf};

/// Default ledger file name, relative to the working directory
pub const DEFAULT_LEDGER_FILE: &str = "expenses.json";

/// Environment variable overriding the ledger file
pub const LEDGER_FILE_ENV: &str = "EXPENSES_FILE";

/// Environment variable enabling the audit log
pub const AUDIT_LOG_ENV: &str = "EXPENSES_AUDIT_LOG";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    ledger_file: PathBuf,
    audit_log: Option<PathBuf>,
}

impl LedgerPaths {
    /// Resolve paths from explicit overrides, then the environment, then defaults
    pub fn resolve(ledger_file: Option<PathBuf>, audit_log: Option<PathBuf>) -> Self {
        let ledger_file = ledger_file
            .or_else(|| env_path(LEDGER_FILE_ENV))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LEDGER_FILE));
        let audit_log = audit_log.or_else(|| env_path(AUDIT_LOG_ENV));

        Self {
            ledger_file,
            audit_log,
        }
    }

    /// Create paths for a specific ledger file with no audit log (useful for testing)
    pub fn with_ledger_file(ledger_file: PathBuf) -> Self {
        Self {
            ledger_file,
            audit_log: None,
        }
    }

    /// Enable the audit log at the given path
    pub fn with_audit_log(mut self, audit_log: PathBuf) -> Self {
        self.audit_log = Some(audit_log);
        self
    }

    /// Get the path to the ledger JSON file
    pub fn ledger_file(&self) -> &Path {
        &self.ledger_file
    }

    /// Get the path to the audit log, if enabled
    pub fn audit_log(&self) -> Option<&Path> {
        self.audit_log.as_deref()
    }
}

impl Default for LedgerPaths {
    fn default() -> Self {
        Self::with_ledger_file(PathBuf::from(DEFAULT_LEDGER_FILE))
    }
}

fn env_path(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
