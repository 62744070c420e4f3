//! Expense display formatting
//!
//! Formats expenses for terminal output, numbered from 1 the way users
//! refer to them when deleting.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Expense;
use crate::reports::format_amount;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format one expense as `N. description: $amount`
pub fn format_expense_line(number: usize, expense: &Expense, currency: &str) -> String {
    format!(
        "{}. {}: {}",
        number,
        expense.description,
        format_amount(currency, expense.amount)
    )
}

/// Format all expenses as a table with a total line
pub fn format_expense_list(expenses: &[Expense], currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows = expenses.iter().enumerate().map(|(i, e)| ExpenseRow {
        number: i + 1,
        id: e.id.to_string(),
        description: e.description.clone(),
        amount: format_amount(currency, e.amount),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::sharp())
        .with(Modify::new(Columns::last()).with(Alignment::right()));

    let total: f64 = expenses.iter().map(|e| e.amount).sum();
    format!("{}\nTotal: {}\n", table, format_amount(currency, total))
}

/// Format the summary figure
pub fn format_summary(total: f64, count: usize, currency: &str) -> String {
    let noun = if count == 1 { "expense" } else { "expenses" };
    format!(
        "Total spent: {} across {} {}\n",
        format_amount(currency, total),
        count,
        noun
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_expense_line() {
        let expense = Expense::new("Coffee", 4.5);
        assert_eq!(format_expense_line(1, &expense, "$"), "1. Coffee: $4.50");
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_expense_list(&[], "$"), "No expenses recorded.\n");
    }

    #[test]
    fn test_format_list() {
        let expenses = vec![Expense::new("Coffee", 4.5), Expense::new("Rent", 1200.0)];
        let output = format_expense_list(&expenses, "$");

        assert!(output.contains("Description"));
        assert!(output.contains("Coffee"));
        assert!(output.contains("$1200.00"));
        assert!(output.contains(&expenses[0].id.to_string()));
        assert!(output.contains("Total: $1204.50"));
    }

    #[test]
    fn test_format_summary() {
        assert_eq!(
            format_summary(30.5, 2, "$"),
            "Total spent: $30.50 across 2 expenses\n"
        );
        assert_eq!(
            format_summary(0.0, 1, "€"),
            "Total spent: €0.00 across 1 expense\n"
        );
    }
}
