//! Native clipboard implementation.

use crate::domain::gateways::Clipboard;
use crate::error::ClipboardError;
use std::sync::Mutex;
use tracing::{debug, info};

/// Clipboard backed by the operating system via `arboard`.
///
/// One handle is opened by [`SystemClipboard::connect`] and kept for the
/// lifetime of the value. On X11 and Wayland the owning handle serves the
/// copied text to other applications, so dropping it after each write would
/// clear the clipboard when no clipboard manager is running.
pub struct SystemClipboard {
    handle: Mutex<arboard::Clipboard>,
}

impl SystemClipboard {
    /// Opens the native clipboard for the rest of the session.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError::Unavailable`] on headless systems or when the
    /// display server refuses the connection.
    pub fn connect() -> Result<Self, ClipboardError> {
        let handle =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        info!("✓ System clipboard available");

        Ok(Self {
            handle: Mutex::new(handle),
        })
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|_| ClipboardError::Unavailable("clipboard handle poisoned".to_string()))?;

        handle
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))?;

        debug!("Wrote {} bytes to clipboard", text.len());
        Ok(())
    }
}
