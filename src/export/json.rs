//! JSON export with schema versioning

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported expense document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    /// Application version that created the export
    pub app_version: String,
    pub expense_count: usize,
    pub total: f64,
    pub expenses: Vec<Expense>,
}

impl ExpenseExport {
    /// Build an export document from the current list
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expense_count: expenses.len(),
            total: expenses.iter().map(|e| e.amount).sum(),
            expenses: expenses.to_vec(),
        }
    }

    /// Check that the counts in the document match its contents
    pub fn validate(&self) -> Result<(), String> {
        if self.expense_count != self.expenses.len() {
            return Err(format!(
                "expense_count is {} but {} expenses are present",
                self.expense_count,
                self.expenses.len()
            ));
        }
        Ok(())
    }
}

/// Export expenses as pretty-printed JSON
pub fn export_expenses_json<W: Write>(expenses: &[Expense], writer: &mut W) -> ExpenseResult<()> {
    let export = ExpenseExport::from_expenses(expenses);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_export() {
        let expenses = vec![Expense::new("Coffee", 4.5), Expense::new("Rent", 1200.0)];

        let mut output = Vec::new();
        export_expenses_json(&expenses, &mut output).unwrap();

        let export: ExpenseExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.expense_count, 2);
        assert_eq!(export.total, 1204.5);
        assert_eq!(export.expenses, expenses);
        assert!(export.validate().is_ok());
    }

    #[test]
    fn test_validate_count_mismatch() {
        let mut export = ExpenseExport::from_expenses(&[Expense::new("Coffee", 4.5)]);
        export.expense_count = 3;
        assert!(export.validate().is_err());
    }
}
