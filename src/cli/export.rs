//! CLI command for data export
//!
//! Writes the budget and its summary to a file or stdout.

use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_budget_csv, export_budget_json, export_budget_yaml};
use crate::models::Budget;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON (budget plus summary)
    Json,
    /// YAML (budget plus summary, human-readable)
    Yaml,
    /// CSV (category rows and group totals)
    Csv,
}

/// Write the export to `writer`
pub fn write_export<W: Write>(budget: &Budget, format: ExportFormat, writer: &mut W) -> BudgetResult<()> {
    match format {
        ExportFormat::Json => export_budget_json(budget, writer),
        ExportFormat::Yaml => export_budget_yaml(budget, writer),
        ExportFormat::Csv => export_budget_csv(budget, writer),
    }
}

/// Handle `budget export`
pub fn handle_export(budget: &Budget, format: ExportFormat, output: Option<PathBuf>) -> BudgetResult<()> {
    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                BudgetError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(budget, format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| BudgetError::Export(e.to_string()))?;
            eprintln!("Budget exported to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(budget, format, &mut writer)?;
        }
    }

    Ok(())
}
