//! Shorten API client
//!
//! Wire types and the HTTP client for the `/api/shorten` endpoint.

pub mod client;
pub mod types;

pub use client::ShortenClient;
pub use types::{ShortenRequest, ShortenResponse};
