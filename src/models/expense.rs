//! Expense model
//!
//! An expense is a single spending entry with an amount, a free-text
//! category and a calendar date. Records carry no identifier; the ledger
//! distinguishes them by position.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date format used for both input and storage
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single recorded expense
///
/// Field order matters: it is the column order of CSV exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Amount spent (not required to be positive)
    pub amount: f64,

    /// Free-text category, may be empty
    pub category: String,

    /// Date in `YYYY-MM-DD` form
    pub date: String,
}

impl Expense {
    /// Create a new expense with the date stored in canonical form
    pub fn new(amount: f64, category: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            category: category.into(),
            date: date.format(DATE_FORMAT).to_string(),
        }
    }

    /// Parse the stored date string
    ///
    /// Returns `None` if the record was loaded with a malformed date.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date).ok()
    }

    /// Check whether this expense falls in the given month and year
    ///
    /// The month is not range-checked: a month of 13 simply matches nothing.
    pub fn falls_in(&self, month: i32, year: i32) -> bool {
        match self.parsed_date() {
            Some(date) => date.month() as i32 == month && date.year() == year,
            None => false,
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - ${:.2}", self.date, self.category, self.amount)
    }
}

/// Parse an amount as entered by the user
///
/// Any finite floating-point number is accepted, including zero and
/// negative values.
pub fn parse_amount(input: &str) -> Result<f64, ExpenseValidationError> {
    let input = input.trim();
    let amount: f64 = input
        .parse()
        .map_err(|_| ExpenseValidationError::InvalidAmount(input.to_string()))?;

    if !amount.is_finite() {
        return Err(ExpenseValidationError::NonFiniteAmount(input.to_string()));
    }

    Ok(amount)
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> Result<NaiveDate, ExpenseValidationError> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| ExpenseValidationError::InvalidDate(input.to_string()))
}

/// Parse a month number for filtering (no range check)
pub fn parse_month(input: &str) -> Result<i32, ExpenseValidationError> {
    let input = input.trim();
    input
        .parse()
        .map_err(|_| ExpenseValidationError::InvalidMonth(input.to_string()))
}

/// Parse a year for filtering (no plausibility check)
pub fn parse_year(input: &str) -> Result<i32, ExpenseValidationError> {
    let input = input.trim();
    input
        .parse()
        .map_err(|_| ExpenseValidationError::InvalidYear(input.to_string()))
}

/// Validation errors for user-supplied expense fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    InvalidAmount(String),
    NonFiniteAmount(String),
    InvalidDate(String),
    InvalidMonth(String),
    InvalidYear(String),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAmount(s) => write!(f, "Invalid amount: '{}'", s),
            Self::NonFiniteAmount(s) => write!(f, "Amount must be a finite number: '{}'", s),
            Self::InvalidDate(s) => write!(f, "Invalid date (expected YYYY-MM-DD): '{}'", s),
            Self::InvalidMonth(s) => write!(f, "Invalid month: '{}'", s),
            Self::InvalidYear(s) => write!(f, "Invalid year: '{}'", s),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
