// UI submodules
mod common;
mod panels;

pub use common::{draw_footer, draw_title_bar};
pub use panels::{draw_error_banner, draw_idle_hint, draw_loading_panel, draw_result_panel};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::app::{App, UiState};
use super::constants::colors;

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // URL input
            Constraint::Min(8),    // Body panel
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, chunks[0]);
    draw_url_input(frame, app, chunks[1]);

    match app.visible_state() {
        UiState::Idle => draw_idle_hint(frame, chunks[2]),
        UiState::Loading => draw_loading_panel(frame, app, chunks[2]),
        UiState::Success(resp) => draw_result_panel(frame, app, resp, chunks[2]),
        UiState::Error(message) => draw_error_banner(frame, message, chunks[2]),
    }

    draw_footer(frame, app, chunks[3]);
}

/// The single URL input field. Dimmed while a request is in flight, which
/// doubles as the disabled-submit indication.
fn draw_url_input(frame: &mut Frame, app: &App, area: Rect) {
    let title = if app.url_input.is_empty() {
        "URL (e.g. https://example.com/long/path)".to_string()
    } else {
        format!("URL ({} chars)", app.url_input.chars().count())
    };

    let border_style = if app.is_loading() {
        Style::default().fg(colors::MUTED)
    } else {
        Style::default()
            .fg(colors::HIGHLIGHT_FG)
            .bg(colors::HIGHLIGHT_BG)
            .bold()
    };

    let input = Paragraph::new(&*app.url_input).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .border_style(border_style),
    );
    frame.render_widget(input, area);
}
