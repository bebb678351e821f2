//! YAML Export functionality
//!
//! Same content as the JSON export, for reading by eye.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::export::json::BudgetExport;
use crate::models::Budget;

/// Export the budget to YAML format
pub fn export_budget_yaml<W: Write>(budget: &Budget, writer: &mut W) -> BudgetResult<()> {
    let export = BudgetExport::from_budget(budget);

    writeln!(writer, "# Monthly budget export")
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_export() {
        let mut output = Vec::new();
        export_budget_yaml(&Budget::default(), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("# Monthly budget export"));
        assert!(text.contains("Stocks & Shares ISA"));

        let value: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
        assert_eq!(value["currency"].as_str(), Some("£"));
        assert_eq!(value["summary"]["total_actual"].as_f64(), Some(2150.0));
    }
}
