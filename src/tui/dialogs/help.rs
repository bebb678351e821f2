//! Help dialog
//!
//! Keyboard shortcuts for the dashboard

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 80, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        section("Navigation"),
        Line::from(""),
        key_line("j/k, ↑/↓", "Move selection down/up"),
        key_line("g/G", "First/last item"),
        Line::from(""),
        section("Items"),
        Line::from(""),
        key_line("a", "Add item to the selected group"),
        key_line("1/2/3", "Add to Needs/Investments/Wants"),
        key_line("e, Enter", "Rename item"),
        key_line("p", "Edit planned amount"),
        key_line("x", "Edit actual amount"),
        key_line("d, Del", "Delete item"),
        Line::from(""),
        section("Budget"),
        Line::from(""),
        key_line("i", "Edit monthly income"),
        key_line("c", "Cycle currency £ → $ → €"),
        Line::from(""),
        section("General"),
        Line::from(""),
        key_line("?", "Show/hide help"),
        key_line("q, Ctrl+C", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Every change is saved as soon as it is made.",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
