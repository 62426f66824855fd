//! CSV Export functionality
//!
//! Exports the ledger to CSV: a fixed header row followed by one row per
//! expense, in ledger order. Records end in `\r\n`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ExpenseError, ExpenseResult};
use crate::storage::Ledger;

/// Header row, matching the field order of `Expense`
pub const CSV_HEADER: [&str; 3] = ["amount", "category", "date"];

/// Export all expenses to CSV, returning the number of data rows written
pub fn export_expenses_csv<W: Write>(ledger: &Ledger, writer: W) -> ExpenseResult<usize> {
    // Header is written by hand so an empty ledger still gets one
    let mut csv_writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(::csv::Terminator::CRLF)
        .from_writer(writer);

    csv_writer
        .write_record(CSV_HEADER)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    let mut count = 0;
    for expense in ledger {
        csv_writer
            .serialize(expense)
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
        count += 1;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(count)
}

/// Export all expenses to a CSV file, overwriting it if present
pub fn export_expenses_csv_to_file<P: AsRef<Path>>(ledger: &Ledger, path: P) -> ExpenseResult<usize> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| {
        ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;

    export_expenses_csv(ledger, BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn expense(amount: f64, category: &str, y: i32, m: u32, d: u32) -> Expense {
        Expense::new(amount, category, NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn export_to_string(ledger: &Ledger) -> String {
        let mut buffer = Vec::new();
        export_expenses_csv(ledger, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_empty_ledger_exports_header_only() {
        let ledger = Ledger::new("unused.json");
        assert_eq!(export_to_string(&ledger), "amount,category,date\r\n");
    }

    #[test]
    fn test_rows_follow_ledger_order() {
        let mut ledger = Ledger::new("unused.json");
        ledger.push(expense(10.0, "food", 2024, 1, 5));
        ledger.push(expense(20.5, "travel", 2024, 2, 10));

        let mut buffer = Vec::new();
        let count = export_expenses_csv(&ledger, &mut buffer).unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "amount,category,date\r\n10.0,food,2024-01-05\r\n20.5,travel,2024-02-10\r\n"
        );
    }

    #[test]
    fn test_fields_needing_quotes() {
        let mut ledger = Ledger::new("unused.json");
        ledger.push(expense(3.0, "food, drinks", 2024, 1, 1));
        ledger.push(expense(4.0, "", 2024, 1, 2));

        let output = export_to_string(&ledger);
        assert!(output.contains("3.0,\"food, drinks\",2024-01-01\r\n"));
        assert!(output.contains("4.0,,2024-01-02\r\n"));
    }

    #[test]
    fn test_export_is_repeatable() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = Ledger::new("unused.json");
        ledger.push(expense(10.0, "food", 2024, 1, 5));
        ledger.push(expense(-2.75, "refund", 2024, 1, 6));

        let first = temp_dir.path().join("first.csv");
        let second = temp_dir.path().join("second.csv");
        export_expenses_csv_to_file(&ledger, &first).unwrap();
        export_expenses_csv_to_file(&ledger, &second).unwrap();

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no-such-dir").join("out.csv");

        let result = export_expenses_csv_to_file(&Ledger::new("unused.json"), &path);
        assert!(matches!(result, Err(ExpenseError::Export(_))));
    }
}
