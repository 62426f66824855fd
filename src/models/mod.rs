//! Core data models for the expense tracker

pub mod expense;

pub use expense::{
    parse_amount, parse_date, parse_month, parse_year, Expense, ExpenseValidationError,
    DATE_FORMAT,
};
