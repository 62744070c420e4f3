//! CSV export

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Export expenses to CSV with an `ID,Description,Amount,Created` header
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> ExpenseResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["ID", "Description", "Amount", "Created"])
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for expense in expenses {
        let created = expense
            .created_at
            .map(|t| t.to_rfc3339())
            .unwrap_or_default();

        csv_writer
            .write_record([
                expense.id.as_uuid().to_string(),
                expense.description.clone(),
                format!("{:.2}", expense.amount),
                created,
            ])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_export() {
        let expenses = vec![
            Expense::new("Coffee", 4.5),
            Expense::new("Dinner, with friends", 62.0),
        ];

        let mut output = Vec::new();
        export_expenses_csv(&expenses, &mut output).unwrap();
        let csv_string = String::from_utf8(output).unwrap();

        let lines: Vec<_> = csv_string.lines().collect();
        assert_eq!(lines[0], "ID,Description,Amount,Created");
        assert!(lines[1].contains(",Coffee,4.50,"));
        assert!(lines[2].contains("\"Dinner, with friends\",62.00"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_csv_export_empty() {
        let mut output = Vec::new();
        export_expenses_csv(&[], &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "ID,Description,Amount,Created\n");
    }
}
