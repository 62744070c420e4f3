//! TUI views

pub mod expense_list;
pub mod form;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use super::app::App;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    form::render(frame, app, layout.form);
    expense_list::render(frame, app, layout.list);
    summary::render(frame, app, layout.summary);
    status_bar::render(frame, app, layout.status_bar);
}
