//! Expense service
//!
//! Business logic for recording expenses: validate the raw input as a whole,
//! then append to the ledger. Nothing is appended unless every field checks
//! out.

use crate::error::ExpenseResult;
use crate::models::{parse_amount, parse_date, Expense};
use crate::storage::Ledger;

/// Raw user input for a new expense
#[derive(Debug, Clone, Default)]
pub struct CreateExpenseInput {
    pub amount: String,
    pub category: String,
    pub date: String,
}

impl CreateExpenseInput {
    pub fn new(
        amount: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            category: category.into(),
            date: date.into(),
        }
    }

    /// Validate all fields and build the expense
    pub fn validate(&self) -> ExpenseResult<Expense> {
        let amount = parse_amount(&self.amount)?;
        let date = parse_date(&self.date)?;
        Ok(Expense::new(amount, self.category.clone(), date))
    }
}

/// Service for expense management
pub struct ExpenseService<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> ExpenseService<'a> {
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Validate and append a new expense
    ///
    /// The ledger is only touched in memory; it is persisted on exit.
    pub fn add(&mut self, input: CreateExpenseInput) -> ExpenseResult<Expense> {
        let expense = input.validate()?;
        self.ledger.push(expense.clone());
        Ok(expense)
    }
}
