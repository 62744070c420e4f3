//! Expense model
//!
//! A single recorded expense: what it was for and how much it cost.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;

/// One recorded expense
///
/// Records written before ids existed only carry `description` and `amount`;
/// they receive a fresh id when loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Stable identifier
    #[serde(default)]
    pub id: ExpenseId,

    /// Free-text description
    pub description: String,

    /// Signed amount, no currency unit
    pub amount: f64,

    /// When the expense was recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Expense {
    /// Create a new expense stamped with the current time
    pub fn new(description: impl Into<String>, amount: f64) -> Self {
        Self {
            id: ExpenseId::new(),
            description: description.into(),
            amount,
            created_at: Some(Utc::now()),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}", self.description, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expense() {
        let expense = Expense::new("Coffee", 4.5);
        assert_eq!(expense.description, "Coffee");
        assert_eq!(expense.amount, 4.5);
        assert!(expense.created_at.is_some());
    }

    #[test]
    fn test_negative_and_zero_amounts_allowed() {
        assert_eq!(Expense::new("Refund", -12.0).amount, -12.0);
        assert_eq!(Expense::new("Free sample", 0.0).amount, 0.0);
    }

    #[test]
    fn test_legacy_record_gets_id() {
        let json = r#"{"description": "Rent", "amount": 1200}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();

        assert_eq!(expense.description, "Rent");
        assert_eq!(expense.amount, 1200.0);
        assert!(expense.created_at.is_none());
        assert!(expense.id.to_string().starts_with("exp-"));
    }

    #[test]
    fn test_serialized_keys() {
        let expense = Expense::new("Coffee", 4.5);
        let value = serde_json::to_value(&expense).unwrap();

        assert_eq!(value["description"], "Coffee");
        assert_eq!(value["amount"], 4.5);
        assert!(value["id"].is_string());
    }

    #[test]
    fn test_display() {
        assert_eq!(Expense::new("Rent", 1200.0).to_string(), "Rent: 1200.00");
    }
}
