use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, UiState};
use crate::interfaces::tui::constants::colors;

/// Draw title bar with version
pub fn draw_title_bar(frame: &mut Frame, area: Rect) {
    let title_text = vec![Line::from(vec![
        Span::styled("Snaplink", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(colors::MUTED),
        ),
        Span::styled("| ", Style::default().fg(colors::MUTED)),
        Span::styled("URL shortener client", Style::default().fg(Color::White)),
    ])];

    let title = Paragraph::new(title_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::PRIMARY)),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw footer with keyboard shortcuts for the current state
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = match app.visible_state() {
        UiState::Loading => vec![("Ctrl+C", "Quit", Color::Magenta)],
        UiState::Success(_) => vec![
            ("Enter", "Shorten", Color::Green),
            ("Ctrl+Y", "Copy", Color::Cyan),
            ("Ctrl+U", "Clear input", Color::Yellow),
            ("Esc", "Quit", Color::Magenta),
        ],
        UiState::Error(_) => vec![
            ("Esc", "Dismiss", Color::Red),
            ("Enter", "Shorten", Color::Green),
        ],
        UiState::Idle => vec![
            ("Enter", "Shorten", Color::Green),
            ("Ctrl+U", "Clear input", Color::Yellow),
            ("Esc", "Clear / Quit", Color::Magenta),
        ],
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(colors::MUTED)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(footer, area);
}
