//! App state and transitions
//!
//! The request lifecycle (`Phase`) and the error banner are tracked
//! separately: the banner overlays whatever panel the phase would show and
//! auto-hides on a deadline, after which the underlying panel (idle hint or
//! an earlier result) is visible again. All timer logic takes explicit
//! `Instant`s so transitions are testable without sleeping.

use std::time::Instant;

use tracing::{error, info};

use crate::api::ShortenResponse;
use crate::errors::Result;
use crate::system::CopyMethod;
use crate::utils::is_plausible_url;

use super::constants::{COPY_CONFIRM_REVERT, ERROR_AUTO_HIDE};

/// Request lifecycle. At most one request is in flight; while `Loading`
/// the submit control is disabled and that is the only concurrency guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success(ShortenResponse),
}

/// The auto-hiding error banner.
#[derive(Debug, Clone)]
pub struct ErrorBanner {
    pub message: String,
    pub deadline: Instant,
}

/// What the body area should currently show. Exactly one of these is
/// visible at a time; the banner takes precedence over the phase panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiState<'a> {
    Idle,
    Loading,
    Success(&'a ShortenResponse),
    Error(&'a str),
}

pub struct App {
    pub url_input: String,
    phase: Phase,
    error: Option<ErrorBanner>,
    copy_confirm_until: Option<Instant>,
    pub should_quit: bool,
    pub tick_count: u64,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        App {
            url_input: String::new(),
            phase: Phase::Idle,
            error: None,
            copy_confirm_until: None,
            should_quit: false,
            tick_count: 0,
        }
    }

    pub fn visible_state(&self) -> UiState<'_> {
        if let Some(banner) = &self.error {
            return UiState::Error(&banner.message);
        }
        match &self.phase {
            Phase::Idle => UiState::Idle,
            Phase::Loading => UiState::Loading,
            Phase::Success(resp) => UiState::Success(resp),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    // ========== 输入编辑 ==========

    pub fn push_char(&mut self, c: char) {
        self.url_input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.url_input.pop();
    }

    pub fn clear_input(&mut self) {
        self.url_input.clear();
    }

    // ========== 提交流程 ==========

    /// Validate the input and enter `Loading`.
    ///
    /// Returns the trimmed URL to submit, or `None` when the submission was
    /// rejected (already in flight, empty, or implausible input). Loading
    /// is entered synchronously, before any network activity starts.
    pub fn begin_submit(&mut self, now: Instant) -> Option<String> {
        if self.is_loading() {
            return None;
        }

        let trimmed = self.url_input.trim().to_string();
        if trimmed.is_empty() {
            self.show_error("Please enter a URL", now);
            return None;
        }
        if !is_plausible_url(&trimmed) {
            self.show_error("Please enter a valid URL", now);
            return None;
        }

        self.error = None;
        self.phase = Phase::Loading;
        Some(trimmed)
    }

    /// Leave `Loading` with the request outcome. Runs exactly once per
    /// submission regardless of success or failure, so the submit control
    /// is never left disabled.
    pub fn finish_submit(&mut self, outcome: Result<ShortenResponse>, now: Instant) {
        match outcome {
            Ok(resp) => {
                info!("shortened {} -> {}", resp.original_url, resp.short_url);
                self.phase = Phase::Success(resp);
                self.error = None;
                self.clear_input();
            }
            Err(e) => {
                self.phase = Phase::Idle;
                self.show_error(e.user_message(), now);
            }
        }
    }

    // ========== 错误横幅 ==========

    pub fn show_error<T: Into<String>>(&mut self, message: T, now: Instant) {
        let message = message.into();
        error!("{}", message);
        self.error = Some(ErrorBanner {
            message,
            deadline: now + ERROR_AUTO_HIDE,
        });
    }

    pub fn dismiss_error(&mut self) -> bool {
        self.error.take().is_some()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    // ========== 复制 ==========

    /// Copy the displayed short URL using the supplied copy mechanism.
    ///
    /// With no success panel visible this reports "nothing to copy" without
    /// invoking the mechanism at all.
    pub fn handle_copy_request<F>(&mut self, now: Instant, copy: F)
    where
        F: FnOnce(&str) -> Result<CopyMethod>,
    {
        let target = match &self.phase {
            Phase::Success(resp) => resp.short_url.clone(),
            _ => {
                self.show_error("Nothing to copy", now);
                return;
            }
        };

        match copy(&target) {
            Ok(method) => {
                info!("copied {} via {:?}", target, method);
                self.copy_confirm_until = Some(now + COPY_CONFIRM_REVERT);
            }
            Err(e) => self.show_error(e.user_message(), now),
        }
    }

    /// Whether the copy control should render its "copied" confirmation.
    pub fn copy_confirm_active(&self) -> bool {
        self.copy_confirm_until.is_some()
    }

    // ========== 定时器 ==========

    /// Advance timers: expire the error banner and the copy confirmation.
    pub fn on_tick(&mut self, now: Instant) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if let Some(banner) = &self.error
            && banner.deadline <= now
        {
            self.error = None;
        }

        if let Some(until) = self.copy_confirm_until
            && until <= now
        {
            self.copy_confirm_until = None;
        }
    }
}
