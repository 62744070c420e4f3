//! Export module for the expense tracker
//!
//! Writes the expense list in one of three formats:
//! - CSV: spreadsheet-compatible rows
//! - JSON: machine-readable document with metadata
//! - YAML: the same document, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

use std::io::Write;

use clap::ValueEnum;

use crate::error::ExpenseResult;
use crate::models::Expense;

pub use self::csv::export_expenses_csv;
pub use self::json::{export_expenses_json, ExpenseExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::{export_expenses_yaml, import_from_yaml};

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

/// Write expenses in the requested format
pub fn export_expenses<W: Write>(
    format: ExportFormat,
    expenses: &[Expense],
    writer: &mut W,
) -> ExpenseResult<()> {
    match format {
        ExportFormat::Csv => export_expenses_csv(expenses, writer),
        ExportFormat::Json => export_expenses_json(expenses, writer),
        ExportFormat::Yaml => export_expenses_yaml(expenses, writer),
    }
}
