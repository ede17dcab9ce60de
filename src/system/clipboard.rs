//! Clipboard access
//!
//! Primary path is the system clipboard via arboard. When that is
//! unavailable (headless session, missing display server) we fall back to
//! the OSC 52 escape sequence, which asks the terminal emulator itself to
//! place the text on the clipboard.

use std::io::{self, Write};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use tracing::{debug, warn};

use crate::errors::{Result, SnaplinkError};

/// Which mechanism ended up performing the copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    SystemClipboard,
    Osc52,
}

pub struct ClipboardWriter;

impl ClipboardWriter {
    /// Copy `text` to the clipboard, trying arboard first and OSC 52 second.
    pub fn copy(text: &str) -> Result<CopyMethod> {
        if text.is_empty() {
            return Err(SnaplinkError::clipboard("Nothing to copy"));
        }

        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
            Ok(()) => Ok(CopyMethod::SystemClipboard),
            Err(e) => {
                debug!("system clipboard unavailable ({}), trying OSC 52", e);
                Self::copy_osc52(text)
            }
        }
    }

    /// Emit an OSC 52 sequence on stderr (the same tty the TUI renders on).
    fn copy_osc52(text: &str) -> Result<CopyMethod> {
        let payload = STANDARD.encode(text.as_bytes());
        let mut out = io::stderr();

        write!(out, "\x1b]52;c;{}\x07", payload)
            .and_then(|_| out.flush())
            .map_err(|e| {
                warn!("OSC 52 write failed: {}", e);
                SnaplinkError::clipboard("Copying is not supported in this environment")
            })?;

        Ok(CopyMethod::Osc52)
    }
}
