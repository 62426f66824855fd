//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the ledger,
//! handling validation before any mutation.

pub mod expense;

pub use expense::{CreateExpenseInput, ExpenseService};
