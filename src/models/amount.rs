//! Parsing of user-entered amounts
//!
//! Amounts are plain `f64` values. Input may carry a leading sign, a `$`
//! symbol and thousands separators.

use std::fmt;

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    Empty,
    InvalidFormat(String),
    NotFinite(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::Empty => write!(f, "Amount is empty"),
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount format: {}", s),
            AmountParseError::NotFinite(s) => write!(f, "Amount must be a finite number: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}

/// Parse an amount such as `4.50`, `$1,200`, `-$3` or `-3`
pub fn parse_amount(input: &str) -> Result<f64, AmountParseError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(AmountParseError::Empty);
    }

    let (negative, s) = match s.strip_prefix('-') {
        Some(stripped) => (true, stripped.trim_start()),
        None => (false, s),
    };

    let s = s.strip_prefix('$').unwrap_or(s);
    let cleaned: String = s.chars().filter(|c| *c != ',').collect();

    // Reject anything f64::from_str accepts that isn't a plain decimal
    // ("inf", "NaN", "1e5", a second sign)
    if cleaned.is_empty()
        || !cleaned
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.')
    {
        return Err(AmountParseError::InvalidFormat(input.trim().to_string()));
    }

    let value: f64 = cleaned
        .parse()
        .map_err(|_| AmountParseError::InvalidFormat(input.trim().to_string()))?;

    if !value.is_finite() {
        return Err(AmountParseError::NotFinite(input.trim().to_string()));
    }

    Ok(if negative { -value } else { value })
}
