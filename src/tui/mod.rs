//! Terminal User Interface module
//!
//! A single-screen dashboard built on ratatui: the spending donut, summary
//! cards, planned/actual bars and the editable group tables.

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

pub use app::App;
pub use terminal::run_tui;
