//! Interactive command-line front end
//!
//! This module wires the ledger, the optional audit log and a console
//! together into a menu-driven session.

pub mod console;
pub mod expense;
pub mod export;
pub mod menu;
pub mod summary;

use std::io::{BufRead, Write};
use std::sync::{Mutex, MutexGuard};

pub use console::Console;
pub use expense::handle_add_expense;
pub use export::handle_export_csv;
pub use menu::{run_menu, MenuChoice};
pub use summary::handle_monthly_summary;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::LedgerPaths;
use crate::error::ExpenseResult;
use crate::storage::{lock_ledger, Ledger, LedgerGuard, LoadStatus};

/// Message shown when an amount, date, month or year fails to parse
pub const INVALID_INPUT: &str = "Invalid input. Please try again.";

/// Whether the menu keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Everything a menu action needs
pub struct Session<'a, R, W> {
    ledger: &'a Mutex<Ledger>,
    pub console: Console<R, W>,
    pub audit: Option<&'a AuditLogger>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(ledger: &'a Mutex<Ledger>, console: Console<R, W>) -> Self {
        Self {
            ledger,
            console,
            audit: None,
        }
    }

    pub fn with_audit(mut self, audit: Option<&'a AuditLogger>) -> Self {
        self.audit = audit;
        self
    }

    /// Lock the ledger for one read or append
    ///
    /// Never hold the lock across a prompt: the Ctrl+C handler needs it to
    /// save.
    pub fn ledger(&self) -> MutexGuard<'a, Ledger> {
        lock_ledger(self.ledger)
    }

    /// Write an audit entry if auditing is enabled
    ///
    /// A failed write is reported as a warning; it never undoes the action.
    pub fn record_audit(&mut self, entry: &AuditEntry) -> ExpenseResult<()> {
        if let Some(logger) = self.audit {
            if let Err(e) = logger.log(entry) {
                self.console.say(format!("Warning: {}", e))?;
            }
        }
        Ok(())
    }
}

/// Report the load status, run the menu, and save on the way out
///
/// The caller loads the ledger first, so a file that cannot be read never
/// reaches a guard and is never written back. Once here, the ledger is saved
/// however the menu ends.
pub fn run<R: BufRead, W: Write>(
    guard: LedgerGuard,
    status: LoadStatus,
    paths: &LedgerPaths,
    input: R,
    mut output: W,
) -> ExpenseResult<()> {
    writeln!(output, "{}", status.message())?;

    let audit = paths.audit_log().map(AuditLogger::new);

    let result = {
        let console = Console::new(input, &mut output);
        let mut session = Session::new(guard.ledger(), console).with_audit(audit.as_ref());
        run_menu(&mut session)
    };

    guard.close(&mut output);
    result
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_script(paths: &LedgerPaths, input: &str) -> (ExpenseResult<()>, String) {
        let mut out = Vec::new();
        let result = Ledger::load(paths.ledger_file()).and_then(|(ledger, status)| {
            let input = Cursor::new(input.as_bytes().to_vec());
            run(LedgerGuard::new(ledger), status, paths, input, &mut out)
        });
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_run_creates_ledger_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_ledger_file(temp_dir.path().join("expenses.json"));

        let (result, out) = run_script(&paths, "1\n10.00\nfood\n2024-01-05\n4\n");
        result.unwrap();

        assert!(out.starts_with("No existing expense data found. Starting fresh.\n"));
        assert!(out.ends_with("Attempting to save expenses...\nExpenses saved successfully!\n"));

        let (ledger, _) = Ledger::load(paths.ledger_file()).unwrap();
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_run_reports_existing_count() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_ledger_file(temp_dir.path().join("expenses.json"));

        run_script(&paths, "1\n1\na\n2024-01-01\n1\n2\nb\n2024-01-02\n4\n").0.unwrap();
        let (_, out) = run_script(&paths, "4\n");

        assert!(out.starts_with("You have 2 expenses logged.\n"));
    }

    #[test]
    fn test_run_saves_when_input_ends_without_exit() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_ledger_file(temp_dir.path().join("expenses.json"));

        let (result, _) = run_script(&paths, "1\n5\nbooks\n2024-05-05\n");
        result.unwrap();

        let (ledger, _) = Ledger::load(paths.ledger_file()).unwrap();
        assert_eq!(ledger.expenses()[0].category, "books");
    }

    #[test]
    fn test_run_malformed_ledger_is_error_and_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        fs::write(&path, "not json").unwrap();
        let paths = LedgerPaths::with_ledger_file(path.clone());

        let (result, out) = run_script(&paths, "4\n");

        assert!(result.is_err());
        assert!(!out.contains("Attempting to save"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "not json");
    }

    #[test]
    fn test_run_writes_audit_log() {
        let temp_dir = TempDir::new().unwrap();
        let audit_path = temp_dir.path().join("audit.log");
        let csv_path = temp_dir.path().join("out.csv");
        let paths = LedgerPaths::with_ledger_file(temp_dir.path().join("expenses.json"))
            .with_audit_log(audit_path.clone());

        let script = format!("1\n10\nfood\n2024-01-05\n3\n{}\n4\n", csv_path.display());
        run_script(&paths, &script).0.unwrap();

        let entries: Vec<AuditEntry> = fs::read_to_string(audit_path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, crate::audit::Operation::Create);
        assert_eq!(entries[1].operation, crate::audit::Operation::Export);
    }

    #[test]
    fn test_audit_failure_is_only_a_warning() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_ledger_file(temp_dir.path().join("expenses.json"))
            .with_audit_log(temp_dir.path().join("no-dir").join("audit.log"));

        let (result, out) = run_script(&paths, "1\n10\nfood\n2024-01-05\n4\n");
        result.unwrap();

        assert!(out.contains("Warning: Audit error:"));
        let (ledger, _) = Ledger::load(paths.ledger_file()).unwrap();
        assert_eq!(ledger.len(), 1);
    }
}
