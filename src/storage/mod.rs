//! Storage layer for the expense tracker
//!
//! Provides the JSON-backed expense store with atomic writes, plus the
//! coordinator that pairs it with the audit log.

pub mod expenses;
pub mod file_io;

pub use expenses::{ExpenseStore, LoadStatus};
pub use file_io::{quarantine, read_json, write_json_atomic, JsonRead};

use std::path::PathBuf;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::ExpensePaths;
use crate::config::settings::Settings;
use crate::error::ExpenseResult;

/// Main storage coordinator: the expense store plus its audit trail
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseStore,
    audit: AuditLogger,
    /// Audit failure from the last mutation, waiting for a shell to show it
    audit_warning: Option<String>,
}

impl Storage {
    /// Open storage, recovering from an unreadable store file
    pub fn new(paths: ExpensePaths, store_path: PathBuf) -> ExpenseResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseStore::open(store_path)?,
            audit: AuditLogger::new(paths.audit_log()),
            audit_warning: None,
            paths,
        })
    }

    /// Open storage, failing if the store file is unreadable
    pub fn new_strict(paths: ExpensePaths, store_path: PathBuf) -> ExpenseResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseStore::open_strict(store_path)?,
            audit: AuditLogger::new(paths.audit_log()),
            audit_warning: None,
            paths,
        })
    }

    /// Open storage at the location the settings point to
    pub fn from_settings(paths: ExpensePaths, settings: &Settings) -> ExpenseResult<Self> {
        let store_path = settings.store_path(&paths);
        Self::new(paths, store_path)
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Keep an audit failure as a warning
    ///
    /// The expense file is already written by the time the audit entry is
    /// appended, so a failure here must not undo or fail the mutation.
    pub fn note_audit_result(&mut self, result: ExpenseResult<()>) {
        if let Err(e) = result {
            self.audit_warning = Some(format!("Change saved, but not audited: {}", e));
        }
    }

    /// Take the pending audit warning, if any
    pub fn take_audit_warning(&mut self) -> Option<String> {
        self.audit_warning.take()
    }

    /// Record a create in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> ExpenseResult<()> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record a delete in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> ExpenseResult<()> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }
}
