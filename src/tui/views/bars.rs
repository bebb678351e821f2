//! Comparison bars view
//!
//! Planned and actual totals per group as a pair of horizontal bars sharing
//! one scale.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::to_color;
use crate::charts::{group_bars, PairedBars};
use crate::models::{Currency, Group};
use crate::services::Summary;

/// Columns reserved for the group label and the amount
const LABEL_WIDTH: u16 = 10;
const AMOUNT_WIDTH: u16 = 12;

/// Render the bars panel
pub fn render(frame: &mut Frame, summary: &Summary, currency: Currency, area: Rect) {
    let block = Block::default()
        .title(" Planned vs Actual ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);

    let bar_width = inner.width.saturating_sub(LABEL_WIDTH + AMOUNT_WIDTH);
    let mut lines = Vec::new();
    for (group, bars) in group_bars(summary) {
        lines.extend(bar_lines(group, &bars, currency, bar_width));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Two lines per group: planned in grey, actual in the group colour
pub fn bar_lines(
    group: Group,
    bars: &PairedBars,
    currency: Currency,
    width: u16,
) -> Vec<Line<'static>> {
    let (planned, actual) = bars.cells(width);
    let empty = Style::default().fg(Color::DarkGray);

    vec![
        Line::from(vec![
            Span::styled(
                format!("{:<w$}", group.name(), w = LABEL_WIDTH as usize),
                Style::default().fg(to_color(group.color())),
            ),
            Span::styled("█".repeat(planned as usize), Style::default().fg(Color::Gray)),
            Span::styled("░".repeat((width - planned) as usize), empty),
            Span::raw(format!(" {:>10}", currency.format(bars.planned))),
        ]),
        Line::from(vec![
            Span::raw(" ".repeat(LABEL_WIDTH as usize)),
            Span::styled(
                "█".repeat(actual as usize),
                Style::default().fg(to_color(group.color())),
            ),
            Span::styled("░".repeat((width - actual) as usize), empty),
            Span::raw(format!(" {:>10}", currency.format(bars.actual))),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_lines_share_scale() {
        let bars = PairedBars::new(400.0, 200.0);
        let lines = bar_lines(Group::Wants, &bars, Currency::Dollar, 20);
        assert_eq!(lines.len(), 2);

        let planned: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        let actual: String = lines[1].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(planned.starts_with("Wants"));
        assert_eq!(planned.matches('█').count(), 20);
        assert_eq!(actual.matches('█').count(), 10);
        assert!(actual.ends_with("$200"));
    }

    #[test]
    fn test_bar_lines_zero_width() {
        let bars = PairedBars::new(0.0, 0.0);
        let lines = bar_lines(Group::Needs, &bars, Currency::Pound, 0);
        let text: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(!text.contains('█'));
    }
}
