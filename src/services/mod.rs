//! Service layer for the expense tracker
//!
//! The service layer sits between the presentation shells and the store,
//! validating input and writing the audit trail.

pub mod expense;
pub mod import;

pub use expense::ExpenseService;
pub use import::{ImportRowError, ImportSummary};
