//! Input translation for the presentation shells
//!
//! Humans number expenses from 1; the store indexes from 0. Everything typed
//! by a user passes through here before reaching the service layer.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::parse_amount;

/// Parse a user-entered amount
pub fn read_amount(input: &str) -> ExpenseResult<f64> {
    parse_amount(input).map_err(|e| ExpenseError::Validation(e.to_string()))
}

/// Convert a one-based display number into a zero-based store index
///
/// Rejects non-numbers, zero and negatives. Upper bounds are left to the
/// store so that out-of-range deletes report `InvalidIndex`.
pub fn parse_display_index(input: &str) -> ExpenseResult<usize> {
    let trimmed = input.trim();
    let number: i64 = trimmed
        .parse()
        .map_err(|_| ExpenseError::Validation(format!("Not a number: '{}'", trimmed)))?;

    if number < 1 {
        return Err(ExpenseError::Validation(format!(
            "Expense numbers start at 1 (got {})",
            number
        )));
    }

    usize::try_from(number - 1)
        .map_err(|_| ExpenseError::Validation(format!("Number too large: {}", number)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_index_translation() {
        assert_eq!(parse_display_index("1").unwrap(), 0);
        assert_eq!(parse_display_index(" 3 ").unwrap(), 2);
    }

    #[test]
    fn test_display_index_rejects_zero_and_negative() {
        assert!(parse_display_index("0").unwrap_err().is_validation());
        assert!(parse_display_index("-2").unwrap_err().is_validation());
        assert!(parse_display_index("two").unwrap_err().is_validation());
        assert!(parse_display_index("").unwrap_err().is_validation());
    }

    #[test]
    fn test_read_amount() {
        assert_eq!(read_amount("$4.50").unwrap(), 4.5);
        assert!(read_amount("four").unwrap_err().is_validation());
    }
}
