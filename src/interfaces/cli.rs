//! One-shot command-line mode
//!
//! `snaplink shorten <url>` validates, submits and prints the short link,
//! optionally copying it to the clipboard. Errors go to stderr with the
//! same user-facing messages the TUI banner shows.

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::debug;

use crate::api::ShortenClient;
use crate::config::Config;
use crate::errors::{Result, SnaplinkError};
use crate::system::{ClipboardWriter, CopyMethod};
use crate::utils::is_plausible_url;

#[derive(Parser)]
#[command(
    name = "snaplink",
    version,
    about = "Terminal client for URL-shortening services"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Shorten a URL and print the result
    Shorten {
        /// The URL to shorten (a bare domain like example.com is accepted)
        url: String,
        /// Copy the short URL to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Launch the interactive terminal interface (the default)
    Tui,
}

/// Run the one-shot shorten flow.
pub fn run_shorten(config: &Config, url: &str, copy: bool) -> Result<()> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(SnaplinkError::validation("Please enter a URL"));
    }
    if !is_plausible_url(trimmed) {
        return Err(SnaplinkError::validation("Please enter a valid URL"));
    }

    debug!("shortening {} via {}", trimmed, config.shorten_endpoint());

    let client = ShortenClient::new(config);
    let resp = client.shorten(trimmed)?;

    println!("{} {}", "Original:".dimmed(), resp.original_url);
    println!("{} {}", "Short:".green().bold(), resp.short_url.bold());

    if copy {
        let method = ClipboardWriter::copy(&resp.short_url)?;
        let note = match method {
            CopyMethod::SystemClipboard => "copied to clipboard",
            CopyMethod::Osc52 => "copied to clipboard (via terminal)",
        };
        println!("{}", note.dimmed());
    }

    Ok(())
}
