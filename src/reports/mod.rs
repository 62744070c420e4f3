//! Reports module for the expense tracker
//!
//! Provides aggregate figures computed from the expense list.

pub mod comparison;

pub use comparison::{format_amount, ReferenceComparison, DEFAULT_REFERENCE_SPEND};
