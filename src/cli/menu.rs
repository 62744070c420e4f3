//! Line-oriented menu shell
//!
//! A numbered menu read from any `BufRead`, so it works the same on a
//! terminal and under test. End of input quits.

use std::io::{BufRead, Write};

use crate::config::settings::Settings;
use crate::display::{format_expense_line, format_summary};
use crate::error::{ExpenseError, ExpenseResult};
use crate::services::ExpenseService;
use crate::storage::Storage;

use super::input::{parse_display_index, read_amount};

const MENU: &str = "\nExpense Tracker\n\
1. Add Expense\n\
2. View Expenses\n\
3. Delete Expense\n\
4. Summary\n\
5. Compare to Reference\n\
6. Quit\n";

fn io_err(e: std::io::Error) -> ExpenseError {
    ExpenseError::Io(e.to_string())
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> ExpenseResult<Option<String>> {
    write!(output, "{}", label).map_err(io_err)?;
    output.flush().map_err(io_err)?;

    let mut line = String::new();
    if input.read_line(&mut line).map_err(io_err)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Run the menu loop until the user quits or input ends
pub fn run_menu<R: BufRead, W: Write>(
    storage: &mut Storage,
    settings: &Settings,
    input: &mut R,
    output: &mut W,
) -> ExpenseResult<()> {
    let currency = settings.currency_symbol.as_str();

    loop {
        write!(output, "{}", MENU).map_err(io_err)?;
        let Some(choice) = prompt(input, output, "Choose an option: ")? else {
            break;
        };

        let mut service = ExpenseService::new(storage);

        match choice.as_str() {
            "1" => {
                let Some(description) = prompt(input, output, "Enter description: ")? else {
                    break;
                };
                let Some(amount) = prompt(input, output, "Enter amount: ")? else {
                    break;
                };

                let result = read_amount(&amount).and_then(|a| service.add(&description, a));
                match result {
                    Ok(expense) => writeln!(output, "Added {}", expense.id).map_err(io_err)?,
                    Err(e) => writeln!(output, "{}", e).map_err(io_err)?,
                }
            }
            "2" => {
                if service.list().is_empty() {
                    writeln!(output, "No expenses recorded.").map_err(io_err)?;
                }
                for (i, expense) in service.list().iter().enumerate() {
                    writeln!(output, "{}", format_expense_line(i + 1, expense, currency))
                        .map_err(io_err)?;
                }
            }
            "3" => {
                let Some(number) = prompt(input, output, "Enter expense index to delete: ")?
                else {
                    break;
                };

                match parse_display_index(&number).and_then(|i| service.delete_at(i)) {
                    Ok(removed) => {
                        writeln!(output, "Deleted {}", removed.description).map_err(io_err)?
                    }
                    Err(e) if e.is_invalid_index() || e.is_validation() => {
                        writeln!(output, "Invalid index!").map_err(io_err)?
                    }
                    Err(e) => return Err(e),
                }
            }
            "4" => {
                let text = format_summary(service.summary(), service.list().len(), currency);
                write!(output, "{}", text).map_err(io_err)?;
            }
            "5" => match service.compare(settings) {
                Ok(cmp) => write!(output, "{}", cmp.format_terminal(currency)).map_err(io_err)?,
                Err(e) => writeln!(output, "{}", e).map_err(io_err)?,
            },
            "6" => break,
            _ => writeln!(output, "Invalid choice!").map_err(io_err)?,
        }

        if let Some(warning) = storage.take_audit_warning() {
            writeln!(output, "Warning: {}", warning).map_err(io_err)?;
        }
    }

    Ok(())
}
