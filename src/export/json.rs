//! JSON Export functionality
//!
//! Exports the budget together with its derived summary.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Budget, Category, Currency};
use crate::services::Summary;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Budget export structure
#[derive(Debug, Clone, Serialize)]
pub struct BudgetExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub income: f64,
    pub currency: Currency,
    pub categories: Vec<Category>,

    /// Totals derived at export time
    pub summary: Summary,

    /// Savings as a percentage of income, absent when income is zero
    pub invested_percent: Option<f64>,
}

impl BudgetExport {
    pub fn from_budget(budget: &Budget) -> Self {
        let summary = Summary::for_budget(budget);
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            income: budget.income,
            currency: budget.currency,
            categories: budget.categories.clone(),
            invested_percent: summary.invested_percent(),
            summary,
        }
    }
}

/// Export the budget as pretty-printed JSON
pub fn export_budget_json<W: Write>(budget: &Budget, writer: &mut W) -> BudgetResult<()> {
    let export = BudgetExport::from_budget(budget);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_json_export_contents() {
        let mut output = Vec::new();
        export_budget_json(&Budget::default(), &mut output).unwrap();

        let value: Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["currency"], "£");
        assert_eq!(value["income"], 3000.0);
        assert_eq!(value["categories"].as_array().unwrap().len(), 6);
        assert_eq!(value["summary"]["remaining"], 850.0);
        assert_eq!(value["summary"]["groups"]["Needs"]["planned"], 1450.0);
        assert_eq!(value["invested_percent"], 20.0);
    }

    #[test]
    fn test_zero_income_exports_null_percent() {
        let mut budget = Budget::default();
        budget.income = 0.0;
        let export = BudgetExport::from_budget(&budget);
        let value = serde_json::to_value(&export).unwrap();
        assert!(value["invested_percent"].is_null());
    }
}
