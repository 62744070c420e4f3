//! CLI command handlers
//!
//! This module contains the presentation shells that are not the TUI: the
//! clap subcommands and the interactive numbered menu.

pub mod expense;
pub mod input;
pub mod menu;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use input::{parse_display_index, read_amount};
pub use menu::run_menu;
