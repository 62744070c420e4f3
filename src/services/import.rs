//! CSV import
//!
//! Bulk-adds expenses from CSV rows of the form `description,amount`.
//! A leading header row is detected and skipped; rows that fail to parse are
//! reported with their line number and do not stop the import.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{parse_amount, Expense};

use super::expense::ExpenseService;

/// A row that could not be imported
#[derive(Debug, Clone, PartialEq)]
pub struct ImportRowError {
    /// 1-based line number in the CSV input
    pub line: u64,
    pub message: String,
}

/// Result of an import run
#[derive(Debug, Clone, Default)]
pub struct ImportSummary {
    pub imported: Vec<Expense>,
    pub skipped: Vec<ImportRowError>,
}

impl ImportSummary {
    /// Total amount of imported expenses
    pub fn total(&self) -> f64 {
        self.imported.iter().map(|e| e.amount).sum()
    }
}

/// A row parsed from CSV before import
#[derive(Debug, Clone, PartialEq)]
struct ParsedRow {
    description: String,
    amount: f64,
}

fn parse_record(record: &StringRecord) -> Result<ParsedRow, String> {
    if record.len() < 2 {
        return Err(format!("expected 2 columns, found {}", record.len()));
    }

    let description = record.get(0).unwrap_or_default().to_string();
    if description.is_empty() {
        return Err("description is empty".to_string());
    }

    let amount = parse_amount(record.get(1).unwrap_or_default()).map_err(|e| e.to_string())?;

    Ok(ParsedRow {
        description,
        amount,
    })
}

fn is_header(record: &StringRecord) -> bool {
    record
        .get(1)
        .map(|field| field.eq_ignore_ascii_case("amount"))
        .unwrap_or(false)
}

impl<'a> ExpenseService<'a> {
    /// Import expenses from CSV
    pub fn import_csv<R: Read>(&mut self, reader: R) -> ExpenseResult<ImportSummary> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        let mut summary = ImportSummary::default();

        for (i, result) in csv_reader.records().enumerate() {
            let record = result.map_err(|e| ExpenseError::Import(e.to_string()))?;
            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or(i as u64 + 1);

            if i == 0 && is_header(&record) {
                continue;
            }
            if record.iter().all(|field| field.is_empty()) {
                continue;
            }

            match parse_record(&record) {
                Ok(row) => rows.push(row),
                Err(message) => summary.skipped.push(ImportRowError { line, message }),
            }
        }

        for row in rows {
            summary.imported.push(self.add(&row.description, row.amount)?);
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::storage::Storage;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone(), paths.expenses_file()).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_import_with_header() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ExpenseService::new(&mut storage);

        let csv = "description,amount\nCoffee,4.50\nRent,\"$1,200.00\"\n";
        let summary = service.import_csv(csv.as_bytes()).unwrap();

        assert_eq!(summary.imported.len(), 2);
        assert!(summary.skipped.is_empty());
        assert_eq!(summary.total(), 1204.5);
        assert_eq!(service.list()[1].description, "Rent");
    }

    #[test]
    fn test_import_without_header() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ExpenseService::new(&mut storage);

        let summary = service.import_csv("Coffee,4.50\n".as_bytes()).unwrap();
        assert_eq!(summary.imported.len(), 1);
    }

    #[test]
    fn test_bad_rows_are_reported() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ExpenseService::new(&mut storage);

        let csv = "Description,Amount\nCoffee,4.50\nBroken,abc\n,3\nOnly one column\n\nLunch,12\n";
        let summary = service.import_csv(csv.as_bytes()).unwrap();

        assert_eq!(summary.imported.len(), 2);
        let lines: Vec<_> = summary.skipped.iter().map(|e| e.line).collect();
        assert_eq!(lines, [3, 4, 5]);
        assert!(summary.skipped[0].message.contains("Invalid amount"));
        assert_eq!(service.list().len(), 2);
    }

    #[test]
    fn test_parse_record() {
        let ok = StringRecord::from(vec!["Coffee", "4.5"]);
        assert_eq!(
            parse_record(&ok),
            Ok(ParsedRow {
                description: "Coffee".into(),
                amount: 4.5
            })
        );

        let short = StringRecord::from(vec!["Coffee"]);
        assert!(parse_record(&short).is_err());
    }
}
