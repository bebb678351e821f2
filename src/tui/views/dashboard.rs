//! Dashboard view
//!
//! Donut of actual spending by group next to the Remaining and Invested cards.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, Paragraph,
    },
    Frame,
};

use super::to_color;
use crate::charts::{spending_donut, Donut};
use crate::display::{format_invested, EMPTY_CHART};
use crate::models::{Currency, Group};
use crate::services::Summary;
use crate::tui::layout::{circle_rect, DashboardLayout};

/// Render the dashboard row
pub fn render(frame: &mut Frame, summary: &Summary, currency: Currency, area: Rect) {
    let layout = DashboardLayout::new(area);

    render_chart(frame, summary, currency, layout.chart);
    render_remaining(frame, summary, currency, layout.remaining);
    render_invested(frame, summary, currency, layout.invested);
}

fn render_chart(frame: &mut Frame, summary: &Summary, currency: Currency, area: Rect) {
    let block = Block::default()
        .title(" Spending ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let donut = spending_donut(summary);
    if donut.is_empty() {
        let placeholder = Paragraph::new(EMPTY_CHART)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, inner);
        return;
    }

    let circle = circle_rect(inner);
    let layers = donut_points(&donut, circle.width, circle.height);
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-1.0, 1.0])
        .y_bounds([-1.0, 1.0])
        .paint(|ctx| {
            for (color, coords) in &layers {
                ctx.draw(&Points {
                    coords,
                    color: *color,
                });
            }
        });
    frame.render_widget(canvas, circle);

    let legend_area = Rect::new(
        circle.x + circle.width + 1,
        inner.y,
        inner.width.saturating_sub(circle.width + 1),
        inner.height,
    );
    frame.render_widget(Paragraph::new(legend_lines(&donut, currency)), legend_area);
}

/// Sample the donut on a braille grid of `cols` x `rows` cells
///
/// Returns one point layer per arc. Canvas y grows upwards, so rows are
/// flipped before asking the donut, which works in screen orientation.
pub fn donut_points(donut: &Donut, cols: u16, rows: u16) -> Vec<(Color, Vec<(f64, f64)>)> {
    let mut layers: Vec<(Color, Vec<(f64, f64)>)> = donut
        .arcs
        .iter()
        .map(|arc| (to_color(arc.color), Vec::new()))
        .collect();

    let dots_x = u32::from(cols) * 2;
    let dots_y = u32::from(rows) * 4;
    if dots_x == 0 || dots_y == 0 {
        return layers;
    }

    for i in 0..dots_x {
        let x = -1.0 + (f64::from(i) + 0.5) * 2.0 / f64::from(dots_x);
        for j in 0..dots_y {
            let y = -1.0 + (f64::from(j) + 0.5) * 2.0 / f64::from(dots_y);
            let Some(arc) = donut.arc_at_point(x, -y) else {
                continue;
            };
            if let Some(index) = donut.arcs.iter().position(|a| std::ptr::eq(a, arc)) {
                layers[index].1.push((x, y));
            }
        }
    }

    layers
}

fn legend_lines(donut: &Donut, currency: Currency) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];
    for arc in &donut.arcs {
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(to_color(arc.color))),
            Span::styled(format!("{:<8}", arc.label), Style::default().fg(Color::White)),
            Span::raw(format!(
                "{:>9} {:>4.0}%",
                currency.format(arc.value),
                arc.share() * 100.0
            )),
        ]));
    }
    lines
}

fn render_remaining(frame: &mut Frame, summary: &Summary, currency: Currency, area: Rect) {
    let color = if summary.is_overspent() {
        Color::Red
    } else {
        Color::Green
    };

    let lines = vec![
        Line::from(Span::styled(
            currency.format(summary.remaining),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "{} spent of {}",
                currency.format(summary.total_actual),
                currency.format(summary.income)
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    render_card(frame, " Remaining ", lines, area);
}

fn render_invested(frame: &mut Frame, summary: &Summary, currency: Currency, area: Rect) {
    let savings = summary.group(Group::Savings);
    let lines = vec![
        Line::from(Span::styled(
            format_invested(summary),
            Style::default()
                .fg(to_color(Group::Savings.color()))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} of income", currency.format(savings.actual)),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    render_card(frame, " Invested ", lines, area);
}

fn render_card(frame: &mut Frame, title: &str, lines: Vec<Line<'static>>, area: Rect) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        area,
    );
}
