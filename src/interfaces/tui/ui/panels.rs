//! Body panels: loading indicator, success result, error banner, idle hint

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::api::ShortenResponse;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{SPINNER_FRAMES, URL_TRUNCATE_LENGTH, colors};
use crate::utils::truncate_url;

pub fn draw_idle_hint(frame: &mut Frame, area: Rect) {
    let hint = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Type a URL above and press Enter to shorten it.",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "A bare domain like example.com works too.",
            Style::default().fg(colors::MUTED),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors::MUTED)),
    );

    frame.render_widget(hint, area);
}

pub fn draw_loading_panel(frame: &mut Frame, app: &App, area: Rect) {
    let frame_idx = (app.tick_count as usize) % SPINNER_FRAMES.len();
    let spinner = SPINNER_FRAMES[frame_idx];

    let loading = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} Shortening...", spinner),
            Style::default().fg(colors::PRIMARY).bold(),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title("Working")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors::PRIMARY)),
    );

    frame.render_widget(loading, area);
}

pub fn draw_result_panel(frame: &mut Frame, app: &App, resp: &ShortenResponse, area: Rect) {
    let display_original = truncate_url(&resp.original_url, URL_TRUNCATE_LENGTH);

    let copy_hint = if app.copy_confirm_active() {
        Span::styled("Copied!", Style::default().fg(colors::SUCCESS).bold())
    } else {
        Span::styled(
            "Press Ctrl+Y to copy the short link",
            Style::default().fg(colors::MUTED),
        )
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Original: ", Style::default().fg(colors::MUTED)),
            Span::styled(display_original.to_string(), Style::default().fg(Color::White)),
        ]),
    ];

    // Keep the full value visible when the display line was truncated
    if display_original != resp.original_url.as_str() {
        lines.push(Line::from(Span::styled(
            format!("          {}", resp.original_url),
            Style::default().fg(colors::MUTED),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Short:    ", Style::default().fg(colors::MUTED)),
        Span::styled(
            resp.short_url.clone(),
            Style::default().fg(colors::PRIMARY).bold(),
        ),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(copy_hint));

    let result = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title("Short link ready")
            .title_style(Style::default().fg(colors::SUCCESS).bold())
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(colors::SUCCESS)),
    );

    frame.render_widget(result, area);
}

pub fn draw_error_banner(frame: &mut Frame, message: &str, area: Rect) {
    let banner = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Hides automatically, or press Esc to dismiss",
            Style::default().fg(colors::MUTED),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .title("Error")
            .title_style(Style::default().fg(colors::ERROR).bold())
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(colors::ERROR)),
    );

    frame.render_widget(banner, area);
}
