//! Monthly Summary
//!
//! Lists the expenses recorded in a given month and year and totals them.

use crate::models::Expense;
use crate::storage::Ledger;

/// Expenses for one month, in ledger order
#[derive(Debug, Clone)]
pub struct MonthlySummary {
    /// Requested month (not range-checked)
    pub month: i32,
    /// Requested year
    pub year: i32,
    /// Matching expenses
    pub expenses: Vec<Expense>,
    /// Sum of matching amounts
    pub total: f64,
}

impl MonthlySummary {
    /// Select every expense whose date falls in `month`/`year`
    pub fn generate(ledger: &Ledger, month: i32, year: i32) -> Self {
        let expenses: Vec<Expense> = ledger
            .iter()
            .filter(|e| e.falls_in(month, year))
            .cloned()
            .collect();
        let total: f64 = expenses.iter().map(|e| e.amount).sum();

        Self {
            month,
            year,
            expenses,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Format the summary for terminal display
    ///
    /// An empty summary prints a single notice and no total line.
    pub fn format_terminal(&self) -> String {
        if self.is_empty() {
            return "No expenses found for this period.\n".to_string();
        }

        let mut output = format!("Expenses for {}/{}:\n", self.month, self.year);
        for expense in &self.expenses {
            output.push_str(&format!("- {}\n", expense));
        }
        output.push_str(&format!("Total: ${:.2}\n", self.total));

        output
    }
}
