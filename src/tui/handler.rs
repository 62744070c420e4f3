//! Event handler for the TUI
//!
//! Routes keyboard events to the form or the expense list.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.expire_status();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
        Event::Error(_) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        // Quit
        KeyCode::Esc => app.quit(),
        KeyCode::Char('q') | KeyCode::Char('c') if ctrl => app.quit(),

        // Delete the selected row
        KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('d') if ctrl => app.delete_selected(),

        // Form focus
        KeyCode::Tab | KeyCode::BackTab => app.toggle_field(),
        KeyCode::Enter => app.submit(),

        // List selection
        KeyCode::Up => app.move_up(),
        KeyCode::Down => app.move_down(),

        // Editing the focused input
        KeyCode::Char(c) if !ctrl => app.focused_input().insert(c),
        KeyCode::Backspace => app.focused_input().backspace(),
        KeyCode::Left => app.focused_input().move_left(),
        KeyCode::Right => app.focused_input().move_right(),
        KeyCode::Home => app.focused_input().move_start(),
        KeyCode::End => app.focused_input().move_end(),

        _ => {}
    }

    Ok(())
}
