//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use std::time::{Duration, Instant};

use ratatui::style::Color;

use crate::cli::input::read_amount;
use crate::config::settings::Settings;
use crate::models::Expense;
use crate::services::ExpenseService;
use crate::storage::{LoadStatus, Storage};

use super::widgets::TextInput;

/// How long a status message stays on screen
const STATUS_TTL: Duration = Duration::from_secs(5);

/// Which form field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Description,
    Amount,
}

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Warning,
    Error,
}

impl StatusKind {
    /// Color used when rendering the message
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

/// A transient message in the status bar
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
    /// Warnings about data loss stay until replaced
    pub sticky: bool,
    created: Instant,
}

impl StatusMessage {
    fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            sticky: false,
            created: Instant::now(),
        }
    }

    fn is_expired(&self) -> bool {
        !self.sticky && self.created.elapsed() >= STATUS_TTL
    }
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a mut Storage,

    /// Application settings
    pub settings: &'a Settings,

    pub should_quit: bool,

    /// Which input has focus
    pub focused: FormField,

    pub description: TextInput,

    pub amount: TextInput,

    /// Selected row in the expense list
    pub selected_index: usize,

    pub status: Option<StatusMessage>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a mut Storage, settings: &'a Settings) -> Self {
        let status = match storage.expenses.load_status() {
            LoadStatus::Recovered { quarantined, .. } => {
                let mut message = StatusMessage::new(
                    StatusKind::Warning,
                    format!(
                        "Expense file was unreadable; started empty. Original saved to {}",
                        quarantined.display()
                    ),
                );
                message.sticky = true;
                Some(message)
            }
            _ => None,
        };

        let mut app = Self {
            storage,
            settings,
            should_quit: false,
            focused: FormField::default(),
            description: TextInput::new()
                .label("Description")
                .placeholder("e.g. Coffee"),
            amount: TextInput::new().label("Amount").placeholder("e.g. 4.50"),
            selected_index: 0,
            status,
        };
        app.sync_focus();
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Current expenses in display order
    pub fn expenses(&self) -> &[Expense] {
        self.storage.expenses.list()
    }

    /// Set a status message
    pub fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(StatusMessage::new(kind, text));
    }

    /// Drop the status message once it has been shown long enough
    pub fn expire_status(&mut self) {
        if self.status.as_ref().is_some_and(|s| s.is_expired()) {
            self.status = None;
        }
    }

    /// The input that currently has focus
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused {
            FormField::Description => &mut self.description,
            FormField::Amount => &mut self.amount,
        }
    }

    /// Move focus to the other field
    pub fn toggle_field(&mut self) {
        self.focused = match self.focused {
            FormField::Description => FormField::Amount,
            FormField::Amount => FormField::Description,
        };
        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        self.description.focused = self.focused == FormField::Description;
        self.amount.focused = self.focused == FormField::Amount;
    }

    /// Validate the form and add an expense
    pub fn submit(&mut self) {
        let description = self.description.value().trim().to_string();
        if description.is_empty() {
            self.focused = FormField::Description;
            self.sync_focus();
            self.set_status(StatusKind::Error, "Enter a description");
            return;
        }

        let amount = match read_amount(self.amount.value()) {
            Ok(amount) => amount,
            Err(e) => {
                self.focused = FormField::Amount;
                self.sync_focus();
                self.set_status(StatusKind::Error, e.to_string());
                return;
            }
        };

        match ExpenseService::new(&mut *self.storage).add(&description, amount) {
            Ok(expense) => {
                self.description.clear();
                self.amount.clear();
                self.focused = FormField::Description;
                self.sync_focus();
                self.selected_index = self.expenses().len().saturating_sub(1);
                self.set_status(
                    StatusKind::Success,
                    format!("Added {} ({})", expense.description, expense.id),
                );
                self.surface_audit_warning();
            }
            Err(e) => self.set_status(StatusKind::Error, e.to_string()),
        }
    }

    /// Delete the selected expense by id
    pub fn delete_selected(&mut self) {
        let Some(id) = self.expenses().get(self.selected_index).map(|e| e.id) else {
            self.set_status(StatusKind::Info, "Nothing to delete");
            return;
        };

        match ExpenseService::new(&mut *self.storage).delete(id) {
            Ok(removed) => {
                let len = self.expenses().len();
                if self.selected_index >= len {
                    self.selected_index = len.saturating_sub(1);
                }
                self.set_status(
                    StatusKind::Success,
                    format!("Deleted {}", removed.description),
                );
                self.surface_audit_warning();
            }
            Err(e) => self.set_status(StatusKind::Error, e.to_string()),
        }
    }

    /// Replace the success message when the audit entry could not be written
    fn surface_audit_warning(&mut self) {
        if let Some(warning) = self.storage.take_audit_warning() {
            self.set_status(StatusKind::Warning, warning);
        }
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.expenses().len() {
            self.selected_index += 1;
        }
    }
}
