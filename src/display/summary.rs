//! Dashboard formatting
//!
//! Text rendition of the dashboard: headline figures, the spending donut as a
//! share table, and the planned/actual bars.

use crate::charts::{group_bars, spending_donut, PairedBars};
use crate::models::{Budget, Currency};
use crate::services::Summary;

/// Width of a text bar in characters
pub const BAR_WIDTH: u16 = 24;

/// Placeholder shown instead of a chart with nothing to draw
pub const EMPTY_CHART: &str = "Add data to see chart";

/// Format the invested percentage, or a dash when it cannot be computed
pub fn format_invested(summary: &Summary) -> String {
    match summary.invested_percent() {
        Some(percent) => format!("{}%", percent),
        None => "—".to_string(),
    }
}

/// Headline figures
pub fn format_overview(summary: &Summary, currency: Currency) -> String {
    let mut output = String::new();

    output.push_str(&format!("  Income:     {}\n", currency.format(summary.income)));
    output.push_str(&format!(
        "  Spent:      {}\n",
        currency.format(summary.total_actual)
    ));

    let overspent = if summary.is_overspent() {
        "  (overspent)"
    } else {
        ""
    };
    output.push_str(&format!(
        "  Remaining:  {}{}\n",
        currency.format(summary.remaining),
        overspent
    ));
    output.push_str(&format!("  Invested:   {}\n", format_invested(summary)));

    output
}

/// Spending share per group, the text form of the donut
pub fn format_spending_shares(summary: &Summary, currency: Currency) -> String {
    let donut = spending_donut(summary);
    if donut.is_empty() {
        return format!("  {}\n", EMPTY_CHART);
    }

    let mut output = String::new();
    for arc in &donut.arcs {
        output.push_str(&format!(
            "  {:<8} {:>5.1}%  {}\n",
            arc.label,
            arc.share() * 100.0,
            currency.format(arc.value)
        ));
    }
    output
}

/// One bar as filled and empty blocks
pub fn render_bar(ratio: f64, width: u16) -> String {
    let filled = (ratio.clamp(0.0, 1.0) * f64::from(width)).round() as usize;
    let width = usize::from(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled.min(width)))
}

fn format_pair(label: &str, bars: &PairedBars, currency: Currency) -> String {
    format!(
        "  {:<8} planned {} {}\n  {:<8} actual  {} {}\n",
        label,
        render_bar(bars.planned_ratio(), BAR_WIDTH),
        currency.format(bars.planned),
        "",
        render_bar(bars.actual_ratio(), BAR_WIDTH),
        currency.format(bars.actual),
    )
}

/// Planned against actual for each group
pub fn format_comparison_bars(summary: &Summary, currency: Currency) -> String {
    group_bars(summary)
        .iter()
        .map(|(group, bars)| format_pair(group.name(), bars, currency))
        .collect()
}

/// The whole dashboard, as printed by `budget show`
pub fn format_dashboard(budget: &Budget) -> String {
    let summary = Summary::for_budget(budget);
    let currency = budget.currency;

    let mut output = String::new();
    output.push_str(&format!("Monthly Budget ({})\n\n", currency.iso_code()));
    output.push_str(&format_overview(&summary, currency));
    output.push_str("\nSpending by group\n");
    output.push_str(&format_spending_shares(&summary, currency));
    output.push_str("\nPlanned vs actual\n");
    output.push_str(&format_comparison_bars(&summary, currency));
    output.push('\n');
    output.push_str(&super::category::format_group_tables(budget));
    output
}
