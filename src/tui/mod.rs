//! Terminal User Interface module
//!
//! A single-screen form for recording expenses: description and amount
//! inputs on top, the expense list below, and a summary panel alongside.
//! The TUI only holds a reference to storage plus transient input state.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
