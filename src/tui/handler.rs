//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers
//! based on the current application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App, EditTarget};
use super::event::Event;
use crate::models::{CategoryField, Group};
use crate::storage::KeyValueStore;

/// Handle an incoming event
pub fn handle_event<S: KeyValueStore>(app: &mut App<S>, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    handle_normal_key(app, key)
}

/// Handle keys when no dialog is open
fn handle_normal_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Home | KeyCode::Char('g') => app.selected_index = 0,
        KeyCode::End | KeyCode::Char('G') => {
            app.selected_index = app.rows().len().saturating_sub(1);
        }

        // Adding
        KeyCode::Char('a') => {
            let group = app.selected_group();
            app.add_to(group);
        }
        KeyCode::Char('1') => app.add_to(Group::Needs),
        KeyCode::Char('2') => app.add_to(Group::Savings),
        KeyCode::Char('3') => app.add_to(Group::Wants),

        // Editing the selected item
        KeyCode::Char('e') | KeyCode::Enter => app.edit_selected(CategoryField::Name),
        KeyCode::Char('p') => app.edit_selected(CategoryField::Planned),
        KeyCode::Char('x') => app.edit_selected(CategoryField::Actual),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),

        // Budget-wide
        KeyCode::Char('i') => app.open_dialog(ActiveDialog::Edit(EditTarget::Income)),
        KeyCode::Char('c') => app.cycle_currency(),

        _ => {}
    }

    Ok(())
}

/// Handle keys while a dialog is open
fn handle_dialog_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => {
            // Close help on any key
            app.close_dialog();
        }
        ActiveDialog::ConfirmDelete(_) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.resolve_delete(true),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.resolve_delete(false),
            _ => {}
        },
        ActiveDialog::Edit(_) => handle_edit_key(app, key),
        ActiveDialog::None => {}
    }

    Ok(())
}

/// Handle keys in the edit dialog
fn handle_edit_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => app.input.delete(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Home => app.input.move_start(),
        KeyCode::End => app.input.move_end(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => app.input.clear(),
        KeyCode::Char(c) => app.input.insert(c),
        _ => {}
    }
}
