//! Save-on-exit guard for the ledger
//!
//! `LedgerGuard` owns the ledger for the lifetime of a session. Calling
//! `close` saves it and reports to the given writer. If the guard is dropped
//! without being closed (early error return, panic) it saves anyway and
//! reports to stdout. `save_on_interrupt` extends the same save to Ctrl+C,
//! which ends the process without unwinding.

use std::io::{self, Write};
use std::process;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{ExpenseError, ExpenseResult};

use super::ledger::Ledger;

/// Exit status after an interrupt (128 + SIGINT)
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Lock the ledger, recovering it if a panicking thread held the lock
pub fn lock_ledger(ledger: &Mutex<Ledger>) -> MutexGuard<'_, Ledger> {
    ledger.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Save the ledger and report the outcome; returns whether the save succeeded
///
/// Failures are reported, never propagated.
pub fn save_and_report<W: Write>(ledger: &Ledger, out: &mut W) -> bool {
    let _ = writeln!(out, "Attempting to save expenses...");

    let saved = match ledger.save() {
        Ok(()) => {
            let _ = writeln!(out, "Expenses saved successfully!");
            true
        }
        Err(e) => {
            let _ = writeln!(out, "Error saving expenses: {}", e);
            false
        }
    };

    let _ = out.flush();
    saved
}

/// Scoped owner of the ledger that guarantees a save on every exit path
pub struct LedgerGuard {
    ledger: Arc<Mutex<Ledger>>,
    armed: bool,
}

impl LedgerGuard {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(ledger)),
            armed: true,
        }
    }

    /// The guarded ledger; lock it only for the duration of one action
    pub fn ledger(&self) -> &Mutex<Ledger> {
        &self.ledger
    }

    /// Save the ledger and exit with status 130 when Ctrl+C arrives
    ///
    /// Only one handler can be installed per process.
    pub fn save_on_interrupt(&self) -> ExpenseResult<()> {
        let ledger = Arc::clone(&self.ledger);

        ctrlc::set_handler(move || {
            let mut out = io::stdout();
            // The menu prompt leaves the cursor mid-line
            let _ = writeln!(out);
            save_and_report(&lock_ledger(&ledger), &mut out);
            process::exit(INTERRUPTED_EXIT_CODE);
        })
        .map_err(|e| ExpenseError::Interrupt(e.to_string()))
    }

    /// Save now, reporting to `out`, and disarm the drop-time save
    pub fn close<W: Write>(mut self, out: &mut W) -> bool {
        self.armed = false;
        save_and_report(&lock_ledger(&self.ledger), out)
    }
}

impl Drop for LedgerGuard {
    fn drop(&mut self) {
        if self.armed {
            self.armed = false;
            save_and_report(&lock_ledger(&self.ledger), &mut io::stdout());
        }
    }
}
