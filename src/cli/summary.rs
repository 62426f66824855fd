//! Monthly-summary menu action

use std::io::{BufRead, Write};

use crate::error::ExpenseResult;
use crate::models::{parse_month, parse_year};
use crate::reports::MonthlySummary;

use super::{Flow, Session, INVALID_INPUT};

/// Prompt for month and year, then print the matching expenses and total
pub fn handle_monthly_summary<R: BufRead, W: Write>(
    session: &mut Session<'_, R, W>,
) -> ExpenseResult<Flow> {
    session.console.say("\n--- View Monthly Summary ---")?;

    let Some(month) = session.console.prompt("Enter the month (1-12): ")? else {
        return Ok(Flow::Exit);
    };
    let Ok(month) = parse_month(&month) else {
        session.console.say(INVALID_INPUT)?;
        return Ok(Flow::Continue);
    };

    let Some(year) = session.console.prompt("Enter the year (e.g., 2024): ")? else {
        return Ok(Flow::Exit);
    };
    let Ok(year) = parse_year(&year) else {
        session.console.say(INVALID_INPUT)?;
        return Ok(Flow::Continue);
    };

    let summary = MonthlySummary::generate(&session.ledger(), month, year);
    if !summary.is_empty() {
        session.console.say("")?;
    }
    session.console.write_text(&summary.format_terminal())?;

    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::test_support::run_action_with;
    use crate::models::Expense;
    use crate::storage::Ledger;
    use chrono::NaiveDate;

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new("unused.json");
        ledger.push(Expense::new(
            10.0,
            "food",
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        ));
        ledger.push(Expense::new(
            20.0,
            "travel",
            NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
        ));
        ledger
    }

    #[test]
    fn test_prints_matching_expenses_and_total() {
        let (_, flow, out) = run_action_with(sample_ledger(), handle_monthly_summary, "1\n2024\n");

        assert_eq!(flow, Flow::Continue);
        assert!(out.contains("Expenses for 1/2024:\n- 2024-01-05: food - $10.00\nTotal: $10.00\n"));
        assert!(!out.contains("travel"));
    }

    #[test]
    fn test_no_matches() {
        let (_, _, out) = run_action_with(sample_ledger(), handle_monthly_summary, "3\n2024\n");

        assert!(out.contains("No expenses found for this period."));
        assert!(!out.contains("Total"));
    }

    #[test]
    fn test_non_numeric_month_aborts_before_year_prompt() {
        let (_, flow, out) = run_action_with(sample_ledger(), handle_monthly_summary, "jan\n2024\n");

        assert_eq!(flow, Flow::Continue);
        assert!(out.contains("Invalid input. Please try again."));
        assert!(!out.contains("Enter the year"));
    }

    #[test]
    fn test_non_numeric_year() {
        let (_, _, out) = run_action_with(sample_ledger(), handle_monthly_summary, "1\nlast\n");
        assert!(out.contains("Invalid input. Please try again."));
    }
}
