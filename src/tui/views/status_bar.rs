//! Status bar view
//!
//! Shows the latest status message, or key hints when there is none.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

const HINTS: &str =
    " Tab: switch field │ Enter: add │ ↑/↓: select │ Del: delete selected │ Esc: quit";

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let line = match &app.status {
        Some(status) => Line::from(Span::styled(
            format!(" {}", status.text),
            Style::default().fg(status.kind.color()),
        )),
        None => Line::from(Span::styled(HINTS, Style::default().fg(Color::DarkGray))),
    };

    frame.render_widget(Paragraph::new(line), area);
}
