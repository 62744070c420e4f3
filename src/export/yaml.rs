//! YAML export
//!
//! Writes the same document as the JSON export, with a comment header.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

use super::json::ExpenseExport;

/// Export expenses to YAML
pub fn export_expenses_yaml<W: Write>(expenses: &[Expense], writer: &mut W) -> ExpenseResult<()> {
    let export = ExpenseExport::from_expenses(expenses);

    let header = format!(
        "# Expense Tracker Export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))
}

/// Read back a YAML export
pub fn import_from_yaml(yaml_str: &str) -> ExpenseResult<ExpenseExport> {
    let export: ExpenseExport =
        serde_yaml::from_str(yaml_str).map_err(|e| ExpenseError::Import(e.to_string()))?;

    export.validate().map_err(ExpenseError::Import)?;
    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_export() {
        let expenses = vec![Expense::new("Groceries", 87.25)];

        let mut output = Vec::new();
        export_expenses_yaml(&expenses, &mut output).unwrap();
        let yaml_string = String::from_utf8(output).unwrap();

        assert!(yaml_string.starts_with("# Expense Tracker Export"));
        assert!(yaml_string.contains("Groceries"));

        // Comments are valid YAML, so the document reads back directly
        let imported = import_from_yaml(&yaml_string).unwrap();
        assert_eq!(imported.expenses.len(), 1);
        assert_eq!(imported.expenses[0].description, "Groceries");
        assert_eq!(imported.total, 87.25);
    }

    #[test]
    fn test_import_rejects_garbage() {
        assert!(import_from_yaml("expenses: 12").is_err());
    }
}
