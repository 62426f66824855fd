//! Export-to-CSV menu action

use std::io::{BufRead, Write};

use crate::audit::AuditEntry;
use crate::error::ExpenseResult;
use crate::export::export_expenses_csv_to_file;

use super::{Flow, Session};

/// Prompt for a file name and write the whole ledger to it as CSV
///
/// Write failures are reported and leave the ledger untouched.
pub fn handle_export_csv<R: BufRead, W: Write>(
    session: &mut Session<'_, R, W>,
) -> ExpenseResult<Flow> {
    session.console.say("\n--- Export to CSV ---")?;

    let Some(filename) = session
        .console
        .prompt("Enter the filename (e.g., expenses.csv): ")?
    else {
        return Ok(Flow::Exit);
    };

    let exported = export_expenses_csv_to_file(&session.ledger(), &filename);
    match exported {
        Ok(rows) => {
            session
                .console
                .say(format!("Expenses exported successfully to {}", filename))?;
            session.record_audit(&AuditEntry::export(filename, rows))?;
        }
        Err(e) => session.console.say(format!("An error occurred: {}", e))?,
    }

    Ok(Flow::Continue)
}
