//! Key event routing
//!
//! Maps key presses to `App` transitions. The URL input is always focused,
//! so action keys live on control combinations and the remaining printable
//! characters go into the field.

use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::system::ClipboardWriter;

use super::app::App;
use super::worker::{self, RuntimeContext};

/// Handle a single key press. Returns `true` when the app should exit.
pub fn handle_key_event(app: &mut App, ctx: &RuntimeContext, key: KeyEvent) -> bool {
    let now = Instant::now();

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return true,
            KeyCode::Char('y') => {
                app.handle_copy_request(now, |text| ClipboardWriter::copy(text));
            }
            KeyCode::Char('u') => app.clear_input(),
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Enter => {
            // begin_submit rejects while a request is in flight
            if let Some(url) = app.begin_submit(now) {
                worker::spawn_shorten(ctx, url);
            }
        }
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Esc => {
            if app.dismiss_error() {
                // Banner dismissed, nothing else to do
            } else if !app.url_input.is_empty() {
                app.clear_input();
            } else {
                return true;
            }
        }
        KeyCode::Char(c) => app.push_char(c),
        _ => {}
    }

    false
}
