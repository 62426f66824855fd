//! Export module for the expense tracker
//!
//! Provides CSV export of the ledger (spreadsheet-compatible).

pub mod csv;

pub use self::csv::{export_expenses_csv, export_expenses_csv_to_file, CSV_HEADER};
