//! Expense ledger backed by a JSON file
//!
//! The ledger is an ordered, append-only list of expenses. It is read once
//! when the program starts and written back wholesale when it exits.

use std::path::PathBuf;

use crate::error::ExpenseResult;
use crate::models::Expense;

use super::file_io::{read_json_optional, write_json_atomic};

/// What `Ledger::load` found on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// The file existed and held this many expenses
    Loaded(usize),
    /// No file yet; the ledger starts empty
    Missing,
}

impl LoadStatus {
    /// User-facing status line
    pub fn message(&self) -> String {
        match self {
            Self::Loaded(count) => format!("You have {} expenses logged.", count),
            Self::Missing => "No existing expense data found. Starting fresh.".to_string(),
        }
    }
}

/// In-memory ledger of expenses, bound to the file it was loaded from
#[derive(Debug, Clone)]
pub struct Ledger {
    path: PathBuf,
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Create an empty ledger that will be saved to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            expenses: Vec::new(),
        }
    }

    /// Load the ledger from `path`
    ///
    /// A missing file yields an empty ledger. An unreadable or malformed file
    /// is an error.
    pub fn load(path: impl Into<PathBuf>) -> ExpenseResult<(Self, LoadStatus)> {
        let path = path.into();

        match read_json_optional::<Vec<Expense>, _>(&path)? {
            Some(expenses) => {
                let status = LoadStatus::Loaded(expenses.len());
                Ok((Self { path, expenses }, status))
            }
            None => Ok((Self::new(path), LoadStatus::Missing)),
        }
    }

    /// Overwrite the backing file with the current contents
    pub fn save(&self) -> ExpenseResult<()> {
        write_json_atomic(&self.path, &self.expenses)
    }

    /// Append an expense
    pub fn push(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// All expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expense> {
        self.expenses.iter()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
