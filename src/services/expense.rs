//! Expense service
//!
//! Validates user input before it reaches the store and records every
//! mutation in the audit log.

use crate::audit::EntityType;
use crate::config::settings::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId};
use crate::reports::ReferenceComparison;
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a mut Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense
    pub fn add(&mut self, description: &str, amount: f64) -> ExpenseResult<Expense> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ExpenseError::Validation(
                "Expense description cannot be empty".into(),
            ));
        }
        if !amount.is_finite() {
            return Err(ExpenseError::Validation(format!(
                "Amount must be a finite number (got {})",
                amount
            )));
        }

        let expense = self.storage.expenses.add(description, amount)?.clone();

        let logged = self.storage.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            &expense,
        );
        self.storage.note_audit_result(logged);

        Ok(expense)
    }

    /// All expenses in display order
    pub fn list(&self) -> &[Expense] {
        self.storage.expenses.list()
    }

    /// Find an expense by its `exp-` short id or full UUID
    pub fn find(&self, identifier: &str) -> Option<&Expense> {
        self.storage
            .expenses
            .list()
            .iter()
            .find(|e| e.id.matches(identifier))
    }

    /// Remove the expense at a zero-based position
    pub fn delete_at(&mut self, index: usize) -> ExpenseResult<Expense> {
        let removed = self.storage.expenses.delete(index)?;
        self.log_removal(&removed);
        Ok(removed)
    }

    /// Remove an expense by id
    pub fn delete(&mut self, id: ExpenseId) -> ExpenseResult<Expense> {
        let removed = self.storage.expenses.delete_by_id(id)?;
        self.log_removal(&removed);
        Ok(removed)
    }

    /// Remove an expense by `exp-` short id or full UUID
    pub fn delete_by_identifier(&mut self, identifier: &str) -> ExpenseResult<Expense> {
        let id = self
            .find(identifier)
            .map(|e| e.id)
            .ok_or_else(|| ExpenseError::expense_not_found(identifier))?;
        self.delete(id)
    }

    /// Sum of all expenses
    pub fn summary(&self) -> f64 {
        self.storage.expenses.summary()
    }

    /// Compare the total against the configured reference spend
    pub fn compare(&self, settings: &Settings) -> ExpenseResult<ReferenceComparison> {
        self.storage
            .expenses
            .compare_to_reference(settings.reference_spend)
    }

    /// Compare the total against an explicit reference spend
    pub fn compare_with(&self, reference: f64) -> ExpenseResult<ReferenceComparison> {
        self.storage.expenses.compare_to_reference(reference)
    }

    fn log_removal(&mut self, removed: &Expense) {
        let logged = self.storage.log_delete(
            EntityType::Expense,
            removed.id.to_string(),
            Some(removed.description.clone()),
            removed,
        );
        self.storage.note_audit_result(logged);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::ExpensePaths;
    use crate::storage::ExpenseStore;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone(), paths.expenses_file()).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_add_trims_and_logs() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ExpenseService::new(&mut storage);

        let expense = service.add("  Coffee ", 4.5).unwrap();
        assert_eq!(expense.description, "Coffee");
        assert_eq!(service.list().len(), 1);

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_id, expense.id.to_string());
    }

    #[test]
    fn test_add_rejects_bad_input() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ExpenseService::new(&mut storage);

        assert!(service.add("   ", 4.5).unwrap_err().is_validation());
        assert!(service.add("Coffee", f64::NAN).unwrap_err().is_validation());
        assert!(service.add("Coffee", f64::INFINITY).unwrap_err().is_validation());
        assert!(service.list().is_empty());
    }

    #[test]
    fn test_add_accepts_negative_and_zero() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ExpenseService::new(&mut storage);

        service.add("Refund", -10.0).unwrap();
        service.add("Free", 0.0).unwrap();
        assert_eq!(service.summary(), -10.0);
    }

    #[test]
    fn test_delete_at_logs_removed_expense() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ExpenseService::new(&mut storage);
        service.add("Coffee", 4.5).unwrap();
        service.add("Rent", 1200.0).unwrap();

        let removed = service.delete_at(0).unwrap();
        assert_eq!(removed.description, "Coffee");
        assert!(service.delete_at(5).unwrap_err().is_invalid_index());

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2].operation, Operation::Delete);
        assert_eq!(entries[2].entity_name.as_deref(), Some("Coffee"));
    }

    #[test]
    fn test_audit_failure_keeps_the_change() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        // A directory where the log file should be makes every append fail
        std::fs::create_dir_all(paths.audit_log()).unwrap();
        let mut storage = Storage::new(paths.clone(), paths.expenses_file()).unwrap();

        let mut service = ExpenseService::new(&mut storage);
        let expense = service.add("Coffee", 4.5).unwrap();
        assert_eq!(service.list().len(), 1);
        let warning = storage.take_audit_warning().unwrap();
        assert!(warning.contains("not audited"));
        assert!(storage.take_audit_warning().is_none());

        let mut service = ExpenseService::new(&mut storage);
        let removed = service.delete_at(0).unwrap();
        assert_eq!(removed.id, expense.id);
        assert!(storage.take_audit_warning().is_some());

        let reopened = ExpenseStore::open(paths.expenses_file()).unwrap();
        assert!(reopened.is_empty());
    }

    #[test]
    fn test_delete_by_identifier() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ExpenseService::new(&mut storage);
        service.add("Coffee", 4.5).unwrap();
        let rent = service.add("Rent", 1200.0).unwrap();

        let short = rent.id.to_string();
        assert_eq!(service.find(&short).unwrap().description, "Rent");

        let removed = service.delete_by_identifier(&short).unwrap();
        assert_eq!(removed.id, rent.id);
        assert!(service.delete_by_identifier(&short).unwrap_err().is_not_found());
        assert_eq!(service.list().len(), 1);
    }

    #[test]
    fn test_compare_uses_settings() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ExpenseService::new(&mut storage);
        service.add("Everything", 70000.0).unwrap();

        let cmp = service.compare(&Settings::default()).unwrap();
        assert_eq!(cmp.difference, -7000.0);

        let cmp = service.compare_with(140000.0).unwrap();
        assert_eq!(cmp.percentage, 50.0);

        assert!(matches!(
            service.compare_with(0.0),
            Err(ExpenseError::InvalidReference(_))
        ));
    }
}
