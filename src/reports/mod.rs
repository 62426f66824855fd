//! Reports module for the expense tracker
//!
//! Provides the monthly expense summary.

pub mod monthly;

pub use monthly::MonthlySummary;
