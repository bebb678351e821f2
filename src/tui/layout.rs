//! Layout definitions for the TUI
//!
//! Header, dashboard row (chart and cards), comparison bars, group tables and
//! a one-line status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title, currency, income
    pub header: Rect,
    /// Donut chart and the summary cards
    pub dashboard: Rect,
    /// Planned vs actual bars
    pub bars: Rect,
    /// Group tables
    pub groups: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Header
                Constraint::Length(12), // Dashboard
                Constraint::Length(8),  // Bars
                Constraint::Min(5),     // Groups
                Constraint::Length(1),  // Status bar
            ])
            .split(area);

        Self {
            header: vertical[0],
            dashboard: vertical[1],
            bars: vertical[2],
            groups: vertical[3],
            status_bar: vertical[4],
        }
    }
}

/// Layout for the dashboard row
pub struct DashboardLayout {
    /// Donut chart panel
    pub chart: Rect,
    /// Remaining card
    pub remaining: Rect,
    /// Invested card
    pub invested: Rect,
}

impl DashboardLayout {
    pub fn new(area: Rect) -> Self {
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let cards = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(horizontal[1]);

        Self {
            chart: horizontal[0],
            remaining: cards[0],
            invested: cards[1],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Largest area inside `r`, left-aligned and vertically centered, that draws
/// a round circle with braille dots (twice as wide as tall, in cells)
pub fn circle_rect(r: Rect) -> Rect {
    let height = r.height.min(r.width / 2);
    let width = height * 2;
    let y = r.y + (r.height - height) / 2;
    Rect::new(r.x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_fills_area() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 50));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status_bar.y, 49);
        assert_eq!(layout.groups.height, 50 - 3 - 12 - 8 - 1);
    }

    #[test]
    fn test_circle_rect() {
        let r = circle_rect(Rect::new(2, 4, 40, 10));
        assert_eq!(r, Rect::new(2, 4, 20, 10));

        let r = circle_rect(Rect::new(0, 0, 10, 10));
        assert_eq!(r, Rect::new(0, 2, 10, 5));
    }

    #[test]
    fn test_centered_rect_fixed() {
        let r = centered_rect_fixed(20, 5, Rect::new(0, 0, 100, 25));
        assert_eq!(r, Rect::new(40, 10, 20, 5));
    }
}
