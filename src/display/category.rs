//! Category display formatting
//!
//! Formats categories as group sections and as a flat list with ids.

use crate::models::{Budget, Category, Currency, Group};
use crate::services::Summary;

/// Format the three group sections (Needs, Investments, Wants) with totals
pub fn format_group_tables(budget: &Budget) -> String {
    let currency = budget.currency;
    let summary = Summary::for_budget(budget);
    let name_width = name_width(&budget.categories);

    let mut output = String::new();

    for (i, group) in Group::SECTION_ORDER.into_iter().enumerate() {
        let totals = summary.group(group);
        output.push_str(&format!(
            "{} ({} / {})\n",
            group.title(),
            currency.format(totals.actual),
            currency.format(totals.planned)
        ));

        let members: Vec<&Category> = budget.in_group(group).collect();
        if members.is_empty() {
            output.push_str("  (no items)\n");
        } else {
            output.push_str(&format!(
                "  {:<width$}  {:>10}  {:>10}\n",
                "Item",
                "Planned",
                "Actual",
                width = name_width
            ));
            for category in members {
                output.push_str(&format_row(category, currency, name_width));
            }
        }

        if i < Group::SECTION_ORDER.len() - 1 {
            output.push('\n');
        }
    }

    let unassigned: Vec<&Category> = budget.unassigned().collect();
    if !unassigned.is_empty() {
        output.push_str("\nNot counted (unknown group)\n");
        for category in unassigned {
            output.push_str(&format!(
                "  {:<width$}  {:>10}  {:>10}  [{}]\n",
                category.name,
                currency.format(category.planned),
                currency.format(category.actual),
                category.group,
                width = name_width
            ));
        }
    }

    output
}

fn format_row(category: &Category, currency: Currency, width: usize) -> String {
    let marker = if category.actual > category.planned {
        " !"
    } else {
        ""
    };
    format!(
        "  {:<width$}  {:>10}  {:>10}{}\n",
        category.name,
        currency.format(category.planned),
        currency.format(category.actual),
        marker,
        width = width
    )
}

fn name_width(categories: &[Category]) -> usize {
    categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4)
}

/// Format a flat list of categories with their ids
pub fn format_category_list(categories: &[Category], currency: Currency) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'budget category add <group>' to create one."
            .to_string();
    }

    let name_width = name_width(categories);
    let id_width = categories
        .iter()
        .map(|c| c.id.to_string().len())
        .max()
        .unwrap_or(2)
        .max(2);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>id_width$}  {:<11}  {:<width$}  {:>10}  {:>10}\n",
        "ID",
        "Group",
        "Category",
        "Planned",
        "Actual",
        id_width = id_width,
        width = name_width
    ));
    output.push_str(&format!(
        "{:->id_width$}  {:-<11}  {:-<width$}  {:->10}  {:->10}\n",
        "",
        "",
        "",
        "",
        "",
        id_width = id_width,
        width = name_width
    ));

    for category in categories {
        let group = match category.known_group() {
            Some(group) => group.title().to_string(),
            None => format!("?{}", category.group),
        };
        output.push_str(&format!(
            "{:>id_width$}  {:<11}  {:<width$}  {:>10}  {:>10}\n",
            category.id,
            group,
            category.name,
            currency.format(category.planned),
            currency.format(category.actual),
            id_width = id_width,
            width = name_width
        ));
    }

    output
}

/// Format category details
pub fn format_category_details(category: &Category, currency: Currency) -> String {
    let mut output = String::new();

    output.push_str(&format!("Category: {}\n", category.name));
    output.push_str(&format!("  ID:       {}\n", category.id));
    output.push_str(&format!(
        "  Group:    {}\n",
        category
            .known_group()
            .map(|g| g.title().to_string())
            .unwrap_or_else(|| category.group.to_string())
    ));
    output.push_str(&format!("  Planned:  {}\n", currency.format(category.planned)));
    output.push_str(&format!("  Actual:   {}\n", currency.format(category.actual)));

    output
}
