//! Group tables view
//!
//! Every category under its group heading with planned, actual and the
//! difference, in section order. Categories with an unknown group are listed
//! last and take no part in the totals.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use super::to_color;
use crate::models::{Category, CategoryId, Currency, Group, UNKNOWN_GROUP_COLOR};
use crate::services::Summary;
use crate::storage::KeyValueStore;
use crate::tui::app::App;

/// Render the group tables
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, summary: &Summary, area: Rect) {
    let block = Block::default()
        .title(" Categories ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let budget = app.store.budget();
    if budget.categories.is_empty() {
        let text = Paragraph::new("No items. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, area);
        return;
    }

    let currency = app.store.currency();
    let mut rows: Vec<Row> = Vec::new();
    let mut row_ids: Vec<Option<CategoryId>> = Vec::new();

    for group in Group::SECTION_ORDER {
        let totals = summary.group(group);
        rows.push(
            Row::new(vec![
                Cell::from(format!("▼ {}", group.title())),
                Cell::from(currency.format(totals.planned)),
                Cell::from(currency.format(totals.actual)),
                Cell::from(""),
            ])
            .style(
                Style::default()
                    .fg(to_color(group.color()))
                    .add_modifier(Modifier::BOLD),
            ),
        );
        row_ids.push(None);

        for category in budget.in_group(group) {
            rows.push(category_row(category, currency));
            row_ids.push(Some(category.id));
        }
    }

    let mut unassigned = budget.unassigned().peekable();
    if unassigned.peek().is_some() {
        rows.push(
            Row::new(vec![Cell::from("▼ Not counted (unknown group)")])
                .style(Style::default().fg(to_color(UNKNOWN_GROUP_COLOR))),
        );
        row_ids.push(None);
        for category in unassigned {
            rows.push(category_row(category, currency));
            row_ids.push(Some(category.id));
        }
    }

    let widths = [
        Constraint::Min(20),    // Name
        Constraint::Length(12), // Planned
        Constraint::Length(12), // Actual
        Constraint::Length(12), // Difference
    ];

    let header = Row::new(vec![
        Cell::from("Item").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Planned").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Actual").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Difference").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let selected_row = app
        .selected_id()
        .and_then(|id| row_ids.iter().position(|row| *row == Some(id)));

    let mut state = TableState::default();
    state.select(selected_row);

    frame.render_stateful_widget(table, area, &mut state);
}

fn category_row(category: &Category, currency: Currency) -> Row<'static> {
    let difference = category.planned - category.actual;
    let difference_style = if difference < 0.0 {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    };

    Row::new(vec![
        Cell::from(format!("  {}", category.name)),
        Cell::from(currency.format(category.planned)),
        Cell::from(currency.format(category.actual)),
        Cell::from(currency.format(difference)).style(difference_style),
    ])
}
