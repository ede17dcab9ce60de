//! Snaplink - a terminal client for URL-shortening services
//!
//! Validates a user-supplied URL, submits it to the service's
//! `/api/shorten` endpoint, renders the resulting short link and offers
//! copy-to-clipboard.
//!
//! # Architecture
//! - `api`: wire types and the blocking HTTP client
//! - `config`: environment-driven runtime configuration
//! - `interfaces`: user interfaces (one-shot CLI, interactive TUI)
//! - `system`: platform concerns (clipboard access)
//! - `utils`: URL plausibility check and display helpers

pub mod api;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod system;
pub mod utils;
