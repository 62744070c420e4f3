//! Stable identifier for expenses
//!
//! Positions in the list shift whenever an earlier expense is removed, so
//! every expense also carries an opaque UUID-backed id assigned at creation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "exp-";

/// Length of the hex prefix shown by `Display`
const SHORT_LEN: usize = 8;

/// Unique identifier of a single expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse a full UUID, with or without the `exp-` prefix
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Check whether a user-supplied identifier refers to this id
    ///
    /// Accepts the full UUID or the short form produced by `Display`
    /// (`exp-1a2b3c4d`), case-insensitively.
    pub fn matches(&self, identifier: &str) -> bool {
        let identifier = identifier.trim().to_ascii_lowercase();
        let identifier = identifier
            .strip_prefix(DISPLAY_PREFIX)
            .unwrap_or(&identifier);

        if identifier.len() < SHORT_LEN {
            return false;
        }

        let full = self.0.to_string();
        full == identifier || (identifier.len() == SHORT_LEN && full.starts_with(identifier))
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, &self.0.to_string()[..SHORT_LEN])
    }
}

impl From<Uuid> for ExpenseId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for ExpenseId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
