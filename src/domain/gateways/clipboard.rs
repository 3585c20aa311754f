//! Gateway trait for the system clipboard.

use crate::error::ClipboardError;

/// Write access to the system clipboard.
///
/// # Implementations
///
/// - [`crate::infrastructure::clipboard::SystemClipboard`] - Native clipboard
/// - [`crate::infrastructure::clipboard::NullClipboard`] - Fallback when no clipboard is available
#[cfg_attr(test, mockall::automock)]
pub trait Clipboard: Send + Sync {
    /// Replaces the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError`] if the clipboard cannot be reached or written.
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
