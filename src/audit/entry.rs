//! Audit entry data structures
//!
//! Defines the operation types and the format of a single audit log entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Expense;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// An expense was added to the ledger
    Create,
    /// The ledger was exported to a file
    Export,
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Human-readable label (category for adds, file path for exports)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// JSON snapshot of the created expense
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Free-text detail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl AuditEntry {
    /// Entry for an expense appended to the ledger
    pub fn create(expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_name: Some(expense.category.clone()),
            after: serde_json::to_value(expense).ok(),
            detail: None,
        }
    }

    /// Entry for a CSV export of `rows` expenses to `destination`
    pub fn export(destination: impl Into<String>, rows: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Export,
            entity_name: Some(destination.into()),
            after: None,
            detail: Some(format!("{} rows", rows)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Expense {
        Expense::new(10.0, "food", NaiveDate::from_ymd_opt(2024, 1, 5).unwrap())
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(&sample());

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_name.as_deref(), Some("food"));
        assert_eq!(
            entry.after,
            Some(serde_json::json!({"amount": 10.0, "category": "food", "date": "2024-01-05"}))
        );
        assert!(entry.detail.is_none());
    }

    #[test]
    fn test_export_entry() {
        let entry = AuditEntry::export("out.csv", 3);

        assert_eq!(entry.operation, Operation::Export);
        assert_eq!(entry.entity_name.as_deref(), Some("out.csv"));
        assert!(entry.after.is_none());
        assert_eq!(entry.detail.as_deref(), Some("3 rows"));
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = AuditEntry::export("out.csv", 0);
        let json = serde_json::to_string(&entry).unwrap();

        assert!(json.contains("\"operation\":\"export\""));
        assert!(!json.contains("\"after\""));

        let back: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.operation, Operation::Export);
    }
}
