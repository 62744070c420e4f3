//! Layout definitions for the TUI
//!
//! Form on top, list and summary side by side, status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Description and amount inputs
    pub form: Rect,
    /// Expense list
    pub list: Rect,
    /// Totals and reference comparison
    pub summary: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Form: border + two inputs
                Constraint::Min(3),    // List and summary
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(30), Constraint::Length(32)])
            .split(vertical[1]);

        Self {
            form: vertical[0],
            list: horizontal[0],
            summary: horizontal[1],
            status_bar: vertical[2],
        }
    }
}
