//! Expense list view

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::reports::format_amount;
use crate::tui::app::App;

/// Render the numbered expense list with the selection highlighted
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Expenses ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let currency = app.settings.currency_symbol.as_str();
    let expenses = app.expenses();

    if expenses.is_empty() {
        let text = Paragraph::new("No expenses yet. Fill in the form and press Enter.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = expenses
        .iter()
        .enumerate()
        .map(|(i, expense)| {
            let amount_color = if expense.amount < 0.0 {
                Color::Green
            } else {
                Color::White
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>3}. ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::raw(expense.description.clone()),
                Span::raw("  "),
                Span::styled(
                    format_amount(currency, expense.amount),
                    Style::default().fg(amount_color),
                ),
                Span::styled(
                    format!("  {}", expense.id),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(list, area, &mut state);
}
