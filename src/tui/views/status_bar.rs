//! Status bar view
//!
//! Save indicator, the latest status message, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::App;

const HINTS: &str = " a:Add  e:Edit  d:Delete  i:Income  c:Currency  ?:Help  q:Quit ";

/// Render the status bar
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let mut spans = vec![];

    if app.store.last_saved().is_some() {
        spans.push(Span::styled(
            " ● Auto-saved locally",
            Style::default().fg(Color::Green),
        ));
    } else {
        spans.push(Span::styled(" ○ Not saved", Style::default().fg(Color::Red)));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(HINTS.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(HINTS, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
