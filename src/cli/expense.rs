//! Add-expense menu action

use std::io::{BufRead, Write};

use crate::audit::AuditEntry;
use crate::error::ExpenseResult;
use crate::models::parse_amount;
use crate::services::{CreateExpenseInput, ExpenseService};

use super::{Flow, Session, INVALID_INPUT};

/// Prompt for amount, category and date, then append the expense
///
/// An unparsable amount aborts before the remaining prompts. Nothing is
/// appended unless every field validates.
pub fn handle_add_expense<R: BufRead, W: Write>(
    session: &mut Session<'_, R, W>,
) -> ExpenseResult<Flow> {
    session.console.say("\n--- Add a New Expense ---")?;

    let Some(amount) = session.console.prompt("Enter the expense amount: ")? else {
        return Ok(Flow::Exit);
    };
    if parse_amount(&amount).is_err() {
        session.console.say(INVALID_INPUT)?;
        return Ok(Flow::Continue);
    }

    let Some(category) = session
        .console
        .prompt("Enter the expense category (e.g., food, travel): ")?
    else {
        return Ok(Flow::Exit);
    };

    let Some(date) = session.console.prompt("Enter the date (YYYY-MM-DD): ")? else {
        return Ok(Flow::Exit);
    };

    let input = CreateExpenseInput::new(amount, category, date);
    let added = ExpenseService::new(&mut session.ledger()).add(input);
    match added {
        Ok(expense) => {
            session.console.say("Expense added successfully!")?;
            session.record_audit(&AuditEntry::create(&expense))?;
        }
        Err(e) if e.is_validation() => session.console.say(INVALID_INPUT)?,
        Err(e) => return Err(e),
    }

    Ok(Flow::Continue)
}
