//! Reference spend comparison
//!
//! Compares the total of all expenses against a reference annual spend.

use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};

/// Default annual spend used as the comparison baseline
pub const DEFAULT_REFERENCE_SPEND: f64 = 63000.0;

/// Outcome of comparing a total against a reference spend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceComparison {
    /// Sum of all expenses
    pub total: f64,
    /// Baseline compared against
    pub reference: f64,
    /// `reference - total`; negative when over the reference
    pub difference: f64,
    /// `total / reference * 100`
    pub percentage: f64,
}

impl ReferenceComparison {
    /// Compute the comparison, rejecting a zero or non-finite reference
    pub fn compute(total: f64, reference: f64) -> ExpenseResult<Self> {
        if !reference.is_finite() || reference == 0.0 {
            return Err(ExpenseError::InvalidReference(reference));
        }

        Ok(Self {
            total,
            reference,
            difference: reference - total,
            percentage: total / reference * 100.0,
        })
    }

    /// Whether the total exceeds the reference
    pub fn is_over(&self) -> bool {
        self.difference < 0.0
    }

    /// Format the comparison for terminal output
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Comparison to Reference Spend\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>19}\n",
            "Total spent:",
            format_amount(currency, self.total)
        ));
        output.push_str(&format!(
            "{:<20} {:>19}\n",
            "Reference:",
            format_amount(currency, self.reference)
        ));

        let label = if self.is_over() { "Over by:" } else { "Remaining:" };
        output.push_str(&format!(
            "{:<20} {:>19}\n",
            label,
            format_amount(currency, self.difference.abs())
        ));
        output.push_str(&format!(
            "{:<20} {:>18.2}%\n",
            "Of reference:", self.percentage
        ));

        output
    }
}

/// Format an amount with a currency symbol and two decimals
pub fn format_amount(currency: &str, amount: f64) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", currency, amount.abs())
    } else {
        format!("{}{:.2}", currency, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over_reference() {
        let cmp = ReferenceComparison::compute(70000.0, 63000.0).unwrap();
        assert_eq!(cmp.difference, -7000.0);
        assert!((cmp.percentage - 111.11).abs() < 0.01);
        assert!(cmp.is_over());
    }

    #[test]
    fn test_under_reference() {
        let cmp = ReferenceComparison::compute(31500.0, DEFAULT_REFERENCE_SPEND).unwrap();
        assert_eq!(cmp.difference, 31500.0);
        assert_eq!(cmp.percentage, 50.0);
        assert!(!cmp.is_over());
    }

    #[test]
    fn test_zero_reference_rejected() {
        let err = ReferenceComparison::compute(100.0, 0.0).unwrap_err();
        assert!(matches!(err, ExpenseError::InvalidReference(_)));
        assert!(ReferenceComparison::compute(100.0, f64::NAN).is_err());
        assert!(ReferenceComparison::compute(100.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_format_terminal() {
        let cmp = ReferenceComparison::compute(70000.0, 63000.0).unwrap();
        let output = cmp.format_terminal("$");

        assert!(output.contains("$70000.00"));
        assert!(output.contains("$63000.00"));
        assert!(output.contains("Over by:"));
        assert!(output.contains("$7000.00"));
        assert!(output.contains("111.11%"));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount("$", 4.5), "$4.50");
        assert_eq!(format_amount("$", -12.0), "-$12.00");
    }
}
