//! Configuration module
//!
//! - Path resolution for the store, settings and log file
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BudgetPaths;
pub use settings::Settings;
