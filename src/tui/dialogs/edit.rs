//! Edit dialog
//!
//! One text field for income or a single category field. Numeric fields
//! accept anything; unparseable input is stored as zero.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::{App, EditTarget};
use crate::tui::layout::centered_rect_fixed;

/// Render the edit dialog
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, target: EditTarget) {
    let area = centered_rect_fixed(50, 7, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", app.edit_title(target)))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    frame.render_widget(&app.input, chunks[0]);

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel  "),
        Span::styled("[Ctrl+U]", Style::default().fg(Color::DarkGray)),
        Span::raw(" Clear"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[2]);
}
