//! Header view
//!
//! Title, currency and income, plus when the budget was last saved.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::App;

/// Render the header
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let currency = app.store.currency();

    let mut spans = vec![
        Span::styled(
            " Monthly Budget ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ Income: "),
        Span::styled(
            currency.format(app.store.income()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  │ Currency: "),
        Span::styled(
            format!("{} {}", currency.symbol(), currency.iso_code()),
            Style::default().fg(Color::Yellow),
        ),
    ];

    if let Some(saved) = app.store.last_saved() {
        spans.push(Span::raw("  │ "));
        spans.push(Span::styled(
            format!("Saved {}", saved.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
