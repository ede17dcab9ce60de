//! Runtime configuration
//!
//! All settings come from the environment (optionally via a `.env` file,
//! loaded by the binary before this module runs). Values are validated up
//! front so a bad environment fails at startup instead of mid-request.

use std::env;
use std::time::Duration;

use url::Url;

use crate::errors::{Result, SnaplinkError};

/// Default origin of the shortening service.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone)]
pub struct Config {
    /// scheme+host+port of the shortening service, no trailing slash
    pub api_base: String,
    /// Global HTTP timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
    /// tracing filter directive, e.g. "info" or "snaplink=debug"
    pub log_filter: String,
    /// Directory for TUI-mode log files.
    pub log_dir: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Config> {
        let api_base = match env::var("SNAPLINK_API_BASE") {
            Ok(raw) => normalize_api_base(&raw)?,
            Err(_) => DEFAULT_API_BASE.to_string(),
        };

        let timeout = match env::var("SNAPLINK_TIMEOUT_SECS") {
            Ok(raw) => Some(parse_timeout(&raw)?),
            Err(_) => None,
        };

        let log_filter = env::var("SNAPLINK_LOG").unwrap_or_else(|_| "info".to_string());
        let log_dir = env::var("SNAPLINK_LOG_DIR").unwrap_or_else(|_| "logs".to_string());

        Ok(Config {
            api_base,
            timeout,
            log_filter,
            log_dir,
        })
    }

    /// Full URL of the shorten endpoint.
    pub fn shorten_endpoint(&self) -> String {
        format!("{}/api/shorten", self.api_base)
    }
}

/// Validate the API base and strip trailing slashes.
pub fn normalize_api_base(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(SnaplinkError::config("SNAPLINK_API_BASE cannot be empty"));
    }

    let parsed = Url::parse(trimmed)
        .map_err(|e| SnaplinkError::config(format!("invalid SNAPLINK_API_BASE: {}", e)))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(SnaplinkError::config(format!(
            "SNAPLINK_API_BASE must be http or https, got {}://",
            parsed.scheme()
        )));
    }

    Ok(trimmed.to_string())
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    let secs: u64 = raw.trim().parse().map_err(|_| {
        SnaplinkError::config(format!(
            "SNAPLINK_TIMEOUT_SECS must be a positive integer, got {:?}",
            raw
        ))
    })?;
    if secs == 0 {
        return Err(SnaplinkError::config(
            "SNAPLINK_TIMEOUT_SECS must be greater than zero",
        ));
    }
    Ok(Duration::from_secs(secs))
}
