//! CSV Export functionality
//!
//! One row per category followed by one total row per group, suitable for a
//! spreadsheet.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Budget, Group};
use crate::services::Summary;

const HEADER: [&str; 6] = ["ID", "Group", "Name", "Planned", "Actual", "Variance"];

/// Export categories and group totals to CSV
pub fn export_budget_csv<W: Write>(budget: &Budget, writer: W) -> BudgetResult<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(HEADER).map_err(export_error)?;

    for group in Group::SECTION_ORDER {
        for category in budget.in_group(group) {
            out.write_record([
                category.id.to_string(),
                group.title().to_string(),
                category.name.clone(),
                format_amount(category.planned),
                format_amount(category.actual),
                format_amount(category.planned - category.actual),
            ])
            .map_err(export_error)?;
        }
    }

    for category in budget.unassigned() {
        out.write_record([
            category.id.to_string(),
            category.group.as_str().to_string(),
            category.name.clone(),
            format_amount(category.planned),
            format_amount(category.actual),
            format_amount(category.planned - category.actual),
        ])
        .map_err(export_error)?;
    }

    let summary = Summary::for_budget(budget);
    for group in Group::SECTION_ORDER {
        let totals = summary.group(group);
        out.write_record([
            String::new(),
            group.title().to_string(),
            "Total".to_string(),
            format_amount(totals.planned),
            format_amount(totals.actual),
            format_amount(totals.variance()),
        ])
        .map_err(export_error)?;
    }

    out.flush().map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}

fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

fn export_error(e: csv::Error) -> BudgetError {
    BudgetError::Export(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_rows() {
        let mut output = Vec::new();
        export_budget_csv(&Budget::default(), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "ID,Group,Name,Planned,Actual,Variance");
        assert_eq!(lines[1], "1,Needs,Rent / Mortgage,1000.00,1000.00,0.00");
        // Investments come before Wants
        assert_eq!(lines[4], "8,Investments,Stocks & Shares ISA,400.00,400.00,0.00");
        assert_eq!(lines[6], "12,Wants,Dining Out,100.00,120.00,-20.00");
        assert_eq!(lines[7], ",Needs,Total,1450.00,1430.00,20.00");
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn test_csv_quotes_awkward_names() {
        let mut budget = Budget::default();
        budget.categories[0].name = "Rent, flat".into();
        let mut output = Vec::new();
        export_budget_csv(&budget, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("1,Needs,\"Rent, flat\",1000.00"));
    }
}
