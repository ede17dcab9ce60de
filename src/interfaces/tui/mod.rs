//! Terminal User Interface (TUI) module
//!
//! Interactive interface for shortening URLs: a single input field, a
//! loading indicator, a result panel with copy-to-clipboard and an
//! auto-hiding error banner.

use std::io;
use std::sync::Arc;
use std::time::Instant;

use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

mod app;
mod constants;
mod event_handler;
mod ui;
mod worker;

pub use app::{App, Phase, UiState};

use crate::api::ShortenClient;
use crate::config::Config;

use constants::TICK_INTERVAL;
use ui::ui;
use worker::RuntimeContext;

/// Run the TUI application
pub fn run_tui(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    install_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    let (outcome_tx, outcome_rx) = crossbeam_channel::unbounded();
    let ctx = RuntimeContext {
        client: Arc::new(ShortenClient::new(config)),
        outcome_tx,
    };
    let mut app = App::new();

    let res = run_app(&mut terminal, &mut app, &ctx, &outcome_rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Main application loop
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    ctx: &RuntimeContext,
    outcome_rx: &crossbeam_channel::Receiver<worker::ShortenOutcome>,
) -> io::Result<()>
where
    io::Error: From<<B as Backend>::Error>,
{
    loop {
        // Render UI
        terminal.draw(|f| ui(f, app))?;

        // Drain completed submissions before handling new input
        while let Ok(outcome) = outcome_rx.try_recv() {
            app.finish_submit(outcome, Instant::now());
        }

        // Handle events, falling through to a tick on poll timeout
        if event::poll(TICK_INTERVAL)? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && event_handler::handle_key_event(app, ctx, key)
            {
                return Ok(());
            }
        }

        app.on_tick(Instant::now());

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Safety net for otherwise-unhandled failures: restore the terminal, log
/// the panic and leave the user a readable message instead of a raw screen.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        tracing::error!("unexpected panic: {}", info);
        eprintln!("Unexpected error. Please restart snaplink.");
        default_hook(info);
    }));
}
