//! Expense store backed by a single JSON file
//!
//! The store owns the ordered list of expenses and mirrors it to disk after
//! every mutation by rewriting the whole file.

use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId};
use crate::reports::ReferenceComparison;

use super::file_io::{quarantine, read_json, write_json_atomic, JsonRead};

/// What happened when the store was opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// No usable file existed; starting with an empty list
    Fresh,
    /// Loaded this many expenses from disk
    Loaded { count: usize },
    /// The file could not be parsed and was copied aside
    Recovered { quarantined: PathBuf, reason: String },
}

/// Authoritative expense list and its on-disk mirror
#[derive(Debug)]
pub struct ExpenseStore {
    path: PathBuf,
    expenses: Vec<Expense>,
    status: LoadStatus,
}

impl ExpenseStore {
    /// Open a store, falling back to an empty list if the file is unreadable
    ///
    /// An unparsable file is quarantined next to the original before being
    /// replaced; `load_status()` reports it as `LoadStatus::Recovered`.
    ///
    /// # Errors
    ///
    /// Fails only on I/O: when the file cannot be read at all, or when the
    /// quarantine copy cannot be made. Starting empty without that copy would
    /// let the next save overwrite the only record of the old data.
    pub fn open(path: impl Into<PathBuf>) -> ExpenseResult<Self> {
        let path = path.into();

        match Self::open_strict(path.clone()) {
            Err(ExpenseError::CorruptStore { reason, .. }) => {
                let quarantined = quarantine(&path)?;
                Ok(Self {
                    path,
                    expenses: Vec::new(),
                    status: LoadStatus::Recovered {
                        quarantined,
                        reason,
                    },
                })
            }
            other => other,
        }
    }

    /// Open a store, failing with `CorruptStore` if the file is unreadable
    pub fn open_strict(path: impl Into<PathBuf>) -> ExpenseResult<Self> {
        let path = path.into();

        let (expenses, status) = match read_json::<Vec<Expense>, _>(&path)? {
            JsonRead::Missing | JsonRead::Blank => (Vec::new(), LoadStatus::Fresh),
            JsonRead::Parsed(expenses) => {
                let count = expenses.len();
                (expenses, LoadStatus::Loaded { count })
            }
        };

        Ok(Self {
            path,
            expenses,
            status,
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// How the store was initialized
    pub fn load_status(&self) -> &LoadStatus {
        &self.status
    }

    /// Append an expense and persist
    ///
    /// No validation happens here; callers check their input first.
    pub fn add(&mut self, description: impl Into<String>, amount: f64) -> ExpenseResult<&Expense> {
        self.expenses.push(Expense::new(description, amount));

        if let Err(e) = self.save() {
            self.expenses.pop();
            return Err(e);
        }

        Ok(&self.expenses[self.expenses.len() - 1])
    }

    /// Append an already-built expense and persist
    pub fn insert(&mut self, expense: Expense) -> ExpenseResult<()> {
        self.expenses.push(expense);

        if let Err(e) = self.save() {
            self.expenses.pop();
            return Err(e);
        }
        Ok(())
    }

    /// All expenses in insertion order
    pub fn list(&self) -> &[Expense] {
        &self.expenses
    }

    /// Number of expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Look up an expense by id
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Current position of an expense
    pub fn position(&self, id: ExpenseId) -> Option<usize> {
        self.expenses.iter().position(|e| e.id == id)
    }

    /// Remove the expense at a zero-based position and persist
    ///
    /// Later expenses shift down by one. An out-of-range index leaves the
    /// store untouched.
    pub fn delete(&mut self, index: usize) -> ExpenseResult<Expense> {
        if index >= self.expenses.len() {
            return Err(ExpenseError::InvalidIndex {
                index,
                len: self.expenses.len(),
            });
        }

        let removed = self.expenses.remove(index);

        if let Err(e) = self.save() {
            self.expenses.insert(index, removed);
            return Err(e);
        }

        Ok(removed)
    }

    /// Remove an expense by id and persist
    pub fn delete_by_id(&mut self, id: ExpenseId) -> ExpenseResult<Expense> {
        let index = self
            .position(id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;
        self.delete(index)
    }

    /// Sum of all amounts
    pub fn summary(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Compare the total against a reference spend
    pub fn compare_to_reference(&self, reference: f64) -> ExpenseResult<ReferenceComparison> {
        ReferenceComparison::compute(self.summary(), reference)
    }

    /// Rewrite the backing file with the full list
    ///
    /// JSON has no NaN or infinity, so a non-finite amount is refused
    /// instead of being written as `null` and making the file unreadable.
    pub fn save(&self) -> ExpenseResult<()> {
        if let Some(bad) = self.expenses.iter().find(|e| !e.amount.is_finite()) {
            return Err(ExpenseError::Validation(format!(
                "Cannot store non-finite amount {} for '{}'",
                bad.amount, bad.description
            )));
        }

        write_json_atomic(&self.path, &self.expenses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::DEFAULT_REFERENCE_SPEND;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, ExpenseStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::open(temp_dir.path().join("expenses.json")).unwrap();
        (temp_dir, store)
    }

    fn descriptions(store: &ExpenseStore) -> Vec<&str> {
        store.list().iter().map(|e| e.description.as_str()).collect()
    }

    #[test]
    fn test_missing_file_is_fresh() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.is_empty());
        assert_eq!(store.load_status(), &LoadStatus::Fresh);
    }

    #[test]
    fn test_add_preserves_order_and_values() {
        let (_temp_dir, mut store) = create_test_store();
        let items = [("Coffee", 4.5), ("Rent", 1200.0), ("Refund", -20.0), ("Gift", 0.0)];

        for (description, amount) in items {
            store.add(description, amount).unwrap();
        }

        let listed: Vec<_> = store
            .list()
            .iter()
            .map(|e| (e.description.as_str(), e.amount))
            .collect();
        assert_eq!(listed, items);
    }

    #[test]
    fn test_add_persists_immediately() {
        let (temp_dir, mut store) = create_test_store();
        store.add("Coffee", 4.5).unwrap();

        let on_disk: Vec<Expense> =
            serde_json::from_str(&fs::read_to_string(temp_dir.path().join("expenses.json")).unwrap())
                .unwrap();
        assert_eq!(on_disk, store.list());
    }

    #[test]
    fn test_delete_shifts_later_entries() {
        let (_temp_dir, mut store) = create_test_store();
        store.add("A", 1.0).unwrap();
        store.add("B", 2.0).unwrap();
        store.add("C", 3.0).unwrap();

        let removed = store.delete(1).unwrap();

        assert_eq!(removed.description, "B");
        assert_eq!(store.len(), 2);
        assert_eq!(descriptions(&store), ["A", "C"]);
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let (temp_dir, mut store) = create_test_store();
        store.add("A", 1.0).unwrap();
        let before = fs::read_to_string(temp_dir.path().join("expenses.json")).unwrap();

        let err = store.delete(1).unwrap_err();

        assert!(matches!(err, ExpenseError::InvalidIndex { index: 1, len: 1 }));
        assert_eq!(store.len(), 1);
        let after = fs::read_to_string(temp_dir.path().join("expenses.json")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_delete_on_empty_store() {
        let (_temp_dir, mut store) = create_test_store();
        assert!(store.delete(0).unwrap_err().is_invalid_index());
    }

    #[test]
    fn test_delete_by_id_survives_renumbering() {
        let (_temp_dir, mut store) = create_test_store();
        store.add("A", 1.0).unwrap();
        let b = store.add("B", 2.0).unwrap().id;
        store.add("C", 3.0).unwrap();

        store.delete(0).unwrap();
        assert_eq!(store.position(b), Some(0));

        let removed = store.delete_by_id(b).unwrap();
        assert_eq!(removed.description, "B");
        assert_eq!(descriptions(&store), ["C"]);

        assert!(store.delete_by_id(b).unwrap_err().is_not_found());
    }

    #[test]
    fn test_summary() {
        let (_temp_dir, mut store) = create_test_store();
        assert_eq!(store.summary(), 0.0);

        store.add("A", 10.0).unwrap();
        store.add("B", 20.5).unwrap();
        assert_eq!(store.summary(), 30.5);
    }

    #[test]
    fn test_compare_to_reference() {
        let (_temp_dir, mut store) = create_test_store();
        store.add("Living", 50000.0).unwrap();
        store.add("Travel", 20000.0).unwrap();

        let cmp = store.compare_to_reference(DEFAULT_REFERENCE_SPEND).unwrap();
        assert_eq!(cmp.total, 70000.0);
        assert_eq!(cmp.reference, 63000.0);
        assert_eq!(cmp.difference, -7000.0);
        assert!((cmp.percentage - 111.11).abs() < 0.01);

        assert!(store.compare_to_reference(0.0).is_err());
    }

    #[test]
    fn test_round_trip() {
        let (temp_dir, mut store) = create_test_store();
        store.add("Coffee", 4.5).unwrap();
        store.add("Rent", 1200.0).unwrap();
        store.add("Refund", -15.25).unwrap();

        let reloaded = ExpenseStore::open(temp_dir.path().join("expenses.json")).unwrap();

        assert_eq!(reloaded.list(), store.list());
        assert_eq!(reloaded.load_status(), &LoadStatus::Loaded { count: 3 });
    }

    #[test]
    fn test_legacy_file_loads() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        fs::write(
            &path,
            r#"[{"description": "Coffee", "amount": 4.5}, {"description": "Rent", "amount": 1200}]"#,
        )
        .unwrap();

        let store = ExpenseStore::open(&path).unwrap();
        assert_eq!(descriptions(&store), ["Coffee", "Rent"]);
        assert_eq!(store.summary(), 1204.5);
    }

    #[test]
    fn test_empty_file_is_fresh() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        fs::write(&path, "").unwrap();

        let store = ExpenseStore::open(&path).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.load_status(), &LoadStatus::Fresh);
    }

    #[test]
    fn test_non_utf8_file_recovers_and_quarantines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let garbage = [0xff, 0xfe, 0x00, 0x5b];
        fs::write(&path, garbage).unwrap();

        let store = ExpenseStore::open(&path).unwrap();
        assert!(store.is_empty());

        match store.load_status() {
            LoadStatus::Recovered { quarantined, .. } => {
                assert_eq!(fs::read(quarantined).unwrap(), garbage);
            }
            other => panic!("expected recovery, got {:?}", other),
        }

        assert!(matches!(
            ExpenseStore::open_strict(&path),
            Err(ExpenseError::CorruptStore { .. })
        ));
    }

    #[test]
    fn test_non_finite_amount_is_not_saved() {
        let (temp_dir, mut store) = create_test_store();
        store.add("Coffee", 4.5).unwrap();

        assert!(store.add("Weird", f64::NAN).unwrap_err().is_validation());
        assert!(store
            .insert(Expense::new("Endless", f64::INFINITY))
            .unwrap_err()
            .is_validation());
        assert_eq!(descriptions(&store), vec!["Coffee"]);

        let reopened = ExpenseStore::open(temp_dir.path().join("expenses.json")).unwrap();
        assert_eq!(reopened.load_status(), &LoadStatus::Loaded { count: 1 });
        assert_eq!(reopened.list()[0].amount, 4.5);
    }

    #[test]
    fn test_corrupt_file_recovers_and_quarantines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        fs::write(&path, "{ this is not json").unwrap();

        let mut store = ExpenseStore::open(&path).unwrap();
        assert!(store.is_empty());

        let quarantined = match store.load_status() {
            LoadStatus::Recovered { quarantined, .. } => quarantined.clone(),
            other => panic!("expected recovery, got {:?}", other),
        };
        assert_eq!(
            fs::read_to_string(&quarantined).unwrap(),
            "{ this is not json"
        );

        // Saving over the corrupt file leaves the quarantined copy alone
        store.add("Coffee", 4.5).unwrap();
        assert_eq!(
            fs::read_to_string(&quarantined).unwrap(),
            "{ this is not json"
        );
    }

    #[test]
    fn test_wrong_shape_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        fs::write(&path, r#"{"description": "not a list", "amount": 1}"#).unwrap();

        let err = ExpenseStore::open_strict(&path).unwrap_err();
        assert!(matches!(err, ExpenseError::CorruptStore { .. }));
        assert!(path.exists());
    }

    #[test]
    fn test_scenario() {
        let (_temp_dir, mut store) = create_test_store();

        store.add("Coffee", 4.50).unwrap();
        store.add("Rent", 1200.0).unwrap();
        assert_eq!(store.summary(), 1204.50);

        store.delete(0).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].description, "Rent");
        assert_eq!(store.list()[0].amount, 1200.0);
    }
}
