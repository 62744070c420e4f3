//! User settings for the expense tracker
//!
//! Manages the reference spend used for comparisons, the currency symbol
//! used for display, and an optional override for the store location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::reports::DEFAULT_REFERENCE_SPEND;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Annual spend that totals are compared against
    #[serde(default = "default_reference_spend")]
    pub reference_spend: f64,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Store file to use instead of `<base>/expenses.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_file: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_reference_spend() -> f64 {
    DEFAULT_REFERENCE_SPEND
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            reference_spend: default_reference_spend(),
            currency_symbol: default_currency(),
            store_file: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| ExpenseError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ExpenseError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ExpenseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject a reference spend that would make percentages non-finite
    pub fn validate(&self) -> Result<(), ExpenseError> {
        if !self.reference_spend.is_finite() || self.reference_spend == 0.0 {
            return Err(ExpenseError::Config(format!(
                "reference_spend must be a finite, non-zero number (got {})",
                self.reference_spend
            )));
        }
        Ok(())
    }

    /// Resolve the store file, honouring the override
    pub fn store_path(&self, paths: &ExpensePaths) -> PathBuf {
        self.store_file
            .clone()
            .unwrap_or_else(|| paths.expenses_file())
    }
}
