//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the state store.

pub mod budget;
pub mod category;
pub mod export;
pub mod prompt;

pub use budget::{handle_currency, handle_income, handle_reset, handle_show};
pub use category::{handle_category_command, CategoryCommands};
pub use export::{handle_export, ExportFormat};
pub use prompt::{ask_yes_no, StdinConfirm};
