//! Summary panel: total and comparison to the reference spend

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::reports::format_amount;
use crate::tui::app::App;

/// Render totals for the current list
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let currency = app.settings.currency_symbol.as_str();
    let store = &app.storage.expenses;

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Expenses:  "),
            Span::styled(store.len().to_string(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::raw("Total:     "),
            Span::styled(
                format_amount(currency, store.summary()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    match store.compare_to_reference(app.settings.reference_spend) {
        Ok(cmp) => {
            let (label, color) = if cmp.is_over() {
                ("Over by:   ", Color::Red)
            } else {
                ("Remaining: ", Color::Green)
            };
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::raw("Reference: "),
                Span::raw(format_amount(currency, cmp.reference)),
            ]));
            lines.push(Line::from(vec![
                Span::raw(label),
                Span::styled(
                    format_amount(currency, cmp.difference.abs()),
                    Style::default().fg(color),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::raw("Used:      "),
                Span::styled(
                    format!("{:.2}%", cmp.percentage),
                    Style::default().fg(color),
                ),
            ]));
        }
        Err(e) => lines.push(Line::from(Span::styled(
            e.to_string(),
            Style::default().fg(Color::Red),
        ))),
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
