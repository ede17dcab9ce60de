//! TUI state-machine flow tests
//!
//! Exercise full submission and copy flows through the public App API with
//! injected clocks and copy mechanisms, no terminal required.

use std::time::{Duration, Instant};

use snaplink::api::ShortenResponse;
use snaplink::errors::SnaplinkError;
use snaplink::interfaces::tui::{App, UiState};
use snaplink::system::CopyMethod;

fn response() -> ShortenResponse {
    ShortenResponse {
        original_url: "https://example.com/some/long/path".to_string(),
        short_url: "http://x/abc".to_string(),
    }
}

#[test]
fn test_submit_success_flow() {
    let mut app = App::new();
    let now = Instant::now();

    for c in "example.com".chars() {
        app.push_char(c);
    }

    // Loading is entered synchronously, before any network activity
    let submitted = app.begin_submit(now).expect("valid URL should submit");
    assert_eq!(submitted, "example.com");
    assert!(matches!(app.visible_state(), UiState::Loading));

    // Completion exits loading exactly once and clears the input
    app.finish_submit(Ok(response()), now);
    assert!(!app.is_loading());
    assert!(app.url_input.is_empty());
    match app.visible_state() {
        UiState::Success(resp) => assert_eq!(resp.short_url, "http://x/abc"),
        other => panic!("unexpected state: {:?}", other),
    }
}

#[test]
fn test_submit_error_flow_with_auto_hide_and_retry() {
    let mut app = App::new();
    let now = Instant::now();

    for c in "example.com".chars() {
        app.push_char(c);
    }
    app.begin_submit(now).unwrap();
    app.finish_submit(
        Err(SnaplinkError::server(500, "Server error (500). Check the server logs.")),
        now,
    );

    // Submit control is re-enabled and the banner shows the server message
    assert!(!app.is_loading());
    match app.visible_state() {
        UiState::Error(msg) => assert!(msg.contains("server logs")),
        other => panic!("unexpected state: {:?}", other),
    }

    // Banner persists just before the 8 s deadline and is gone at it
    app.on_tick(now + Duration::from_millis(7_900));
    assert!(matches!(app.visible_state(), UiState::Error(_)));
    app.on_tick(now + Duration::from_secs(8));
    assert!(matches!(app.visible_state(), UiState::Idle));

    // The preserved input can be resubmitted
    assert_eq!(app.url_input, "example.com");
    assert!(app.begin_submit(now + Duration::from_secs(9)).is_some());
}

#[test]
fn test_second_submission_blocked_while_in_flight() {
    let mut app = App::new();
    let now = Instant::now();

    app.push_char('a');
    for c in ".example.com".chars() {
        app.push_char(c);
    }
    assert!(app.begin_submit(now).is_some());
    assert!(app.begin_submit(now).is_none());

    // Exactly one completion re-enables submission
    app.finish_submit(Ok(response()), now);
    app.push_char('b');
    for c in ".example.com".chars() {
        app.push_char(c);
    }
    assert!(app.begin_submit(now).is_some());
}

#[test]
fn test_copy_flow_with_confirmation_revert() {
    let mut app = App::new();
    let now = Instant::now();

    for c in "example.com".chars() {
        app.push_char(c);
    }
    app.begin_submit(now).unwrap();
    app.finish_submit(Ok(response()), now);

    app.handle_copy_request(now, |text| {
        assert_eq!(text, "http://x/abc");
        Ok(CopyMethod::Osc52)
    });
    assert!(app.copy_confirm_active());

    app.on_tick(now + Duration::from_millis(4_900));
    assert!(app.copy_confirm_active());
    app.on_tick(now + Duration::from_secs(5));
    assert!(!app.copy_confirm_active());
}

#[test]
fn test_copy_without_result_reports_nothing_to_copy() {
    let mut app = App::new();
    let now = Instant::now();

    let mut clipboard_touched = false;
    app.handle_copy_request(now, |_| {
        clipboard_touched = true;
        Ok(CopyMethod::SystemClipboard)
    });

    assert!(!clipboard_touched);
    match app.visible_state() {
        UiState::Error(msg) => assert_eq!(msg, "Nothing to copy"),
        other => panic!("unexpected state: {:?}", other),
    }
}

#[test]
fn test_validation_rejected_before_any_request() {
    let mut app = App::new();
    let now = Instant::now();

    for c in "not a url at all".chars() {
        app.push_char(c);
    }
    // No URL is handed back for submission
    assert!(app.begin_submit(now).is_none());
    assert!(!app.is_loading());
    assert!(matches!(app.visible_state(), UiState::Error(_)));
}
