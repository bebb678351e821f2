//! Export module for the budget tracker
//!
//! Exports the budget and its derived summary in several formats:
//! - CSV: category rows and group totals (spreadsheet-compatible)
//! - JSON: machine-readable full export
//! - YAML: human-readable full export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_budget_csv;
pub use json::{export_budget_json, BudgetExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_budget_yaml;
