//! Dialog modules for the TUI
//!
//! Modal overlays: delete confirmation, the single-value editor and help

pub mod confirm;
pub mod edit;
pub mod help;
