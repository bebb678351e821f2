//! TUI Views module
//!
//! The single dashboard screen: header, donut and cards, comparison bars, the
//! group tables and the status bar, with any open dialog drawn on top.

pub mod bars;
pub mod dashboard;
pub mod groups;
pub mod header;
pub mod status_bar;

use ratatui::style::Color;
use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use crate::models::Rgb;
use crate::storage::KeyValueStore;

/// Render the entire application
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let layout = AppLayout::new(frame.area());
    let summary = app.summary();

    header::render(frame, app, layout.header);
    dashboard::render(frame, &summary, app.store.currency(), layout.dashboard);
    bars::render(frame, &summary, app.store.currency(), layout.bars);
    groups::render(frame, app, &summary, layout.groups);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::ConfirmDelete(id) => {
            let name = app
                .store
                .budget()
                .find(id)
                .map(|c| c.name.as_str())
                .unwrap_or_default();
            dialogs::confirm::render(frame, crate::services::DELETE_PROMPT, name);
        }
        ActiveDialog::Edit(target) => dialogs::edit::render(frame, app, target),
        ActiveDialog::None => {}
    }
}

/// Terminal colour for a model colour
pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}
