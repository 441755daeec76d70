//! Terminal User Interface module
//!
//! The interactive quote wizard built on ratatui: a progress header, one
//! body per step, a status bar with key hints, toasts and a help overlay.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
