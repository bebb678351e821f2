//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;
use tracing::info;

use crate::config::settings::Settings;
use crate::services::BudgetStore;
use crate::storage::KeyValueStore;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Restore the terminal before the panic message is printed
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application until the user quits
pub fn run_tui<S: KeyValueStore>(store: BudgetStore<S>, settings: Settings) -> Result<()> {
    let tick_rate = Duration::from_millis(settings.tick_rate_ms.max(10));
    let mut app = App::new(store, settings);

    let mut terminal = init_terminal()?;
    let events = EventHandler::new(tick_rate);
    info!("started terminal UI");

    let result = run_loop(&mut terminal, &mut app, &events);

    restore_terminal()?;
    info!("left terminal UI");
    result
}

fn run_loop<S: KeyValueStore>(terminal: &mut Tui, app: &mut App<S>, events: &EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, app))?;

        match events.next()? {
            Event::Resize(_, _) => {
                // Redrawn at the top of the loop
            }
            event => handle_event(app, event)?,
        }
    }
    Ok(())
}
