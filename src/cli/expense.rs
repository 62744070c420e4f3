//! Expense CLI commands
//!
//! Implements the scriptable subcommands: add, list, delete, summary,
//! compare, export, import and log.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_list, format_summary};
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses, ExportFormat};
use crate::services::ExpenseService;
use crate::storage::Storage;

use super::input::{parse_display_index, read_amount};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount (e.g., "4.50" or "$1,200")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// List all expenses
    #[command(alias = "ls")]
    List,
    /// Delete an expense by its number in `list` or by id
    #[command(alias = "rm")]
    Delete {
        /// Expense number as shown by `list` (starting at 1)
        #[arg(
            required_unless_present = "id",
            conflicts_with = "id",
            allow_hyphen_values = true
        )]
        number: Option<String>,
        /// Expense id (e.g., exp-1a2b3c4d)
        #[arg(long)]
        id: Option<String>,
    },
    /// Show the total of all expenses
    Summary,
    /// Compare the total against the reference spend
    Compare {
        /// Reference spend to compare against (defaults to the configured value)
        #[arg(short, long)]
        reference: Option<f64>,
    },
    /// Export expenses
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Import expenses from a CSV file of `description,amount` rows
    Import {
        /// Path to CSV file
        file: PathBuf,
    },
    /// Show recent audit log entries
    Log {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
        } => {
            let amount = read_amount(&amount)?;
            let expense = ExpenseService::new(storage).add(&description, amount)?;

            println!("Added expense: {}", expense.description);
            println!("  Amount: {}", crate::reports::format_amount(currency, expense.amount));
            println!("  ID: {}", expense.id);
        }

        ExpenseCommands::List => {
            print!("{}", format_expense_list(storage.expenses.list(), currency));
        }

        ExpenseCommands::Delete { number, id } => {
            let mut service = ExpenseService::new(storage);
            let removed = match (number, id) {
                (_, Some(id)) => service.delete_by_identifier(&id)?,
                (Some(number), None) => service.delete_at(parse_display_index(&number)?)?,
                (None, None) => {
                    return Err(ExpenseError::Validation(
                        "Specify an expense number or --id".into(),
                    ))
                }
            };
            println!("Deleted expense: {} ({})", removed.description, removed.id);
        }

        ExpenseCommands::Summary => {
            let store = &storage.expenses;
            print!("{}", format_summary(store.summary(), store.len(), currency));
        }

        ExpenseCommands::Compare { reference } => {
            let service = ExpenseService::new(storage);
            let comparison = match reference {
                Some(reference) => service.compare_with(reference)?,
                None => service.compare(settings)?,
            };
            print!("{}", comparison.format_terminal(currency));
        }

        ExpenseCommands::Export { format, output } => {
            let expenses = storage.expenses.list();
            match output {
                Some(path) => {
                    let file = File::create(&path).map_err(|e| {
                        ExpenseError::Export(format!("Failed to create {}: {}", path.display(), e))
                    })?;
                    let mut writer = BufWriter::new(file);
                    export_expenses(format, expenses, &mut writer)?;
                    writer
                        .flush()
                        .map_err(|e| ExpenseError::Export(e.to_string()))?;
                    println!("Exported {} expenses to {}", expenses.len(), path.display());
                }
                None => {
                    let stdout = io::stdout();
                    let mut handle = stdout.lock();
                    export_expenses(format, expenses, &mut handle)?;
                }
            }
        }

        ExpenseCommands::Import { file } => {
            let reader = File::open(&file).map_err(|e| {
                ExpenseError::Import(format!("Failed to open {}: {}", file.display(), e))
            })?;
            let summary = ExpenseService::new(storage).import_csv(reader)?;

            println!(
                "Imported {} expenses totalling {}",
                summary.imported.len(),
                crate::reports::format_amount(currency, summary.total())
            );
            for skipped in &summary.skipped {
                println!("  Skipped line {}: {}", skipped.line, skipped.message);
            }
        }

        ExpenseCommands::Log { limit } => {
            let entries = storage.audit().read_recent(limit)?;
            if entries.is_empty() {
                println!("Audit log is empty.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
    }

    if let Some(warning) = storage.take_audit_warning() {
        eprintln!("Warning: {}", warning);
    }

    Ok(())
}
