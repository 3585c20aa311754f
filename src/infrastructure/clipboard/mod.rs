//! Clipboard access for the copy action.
//!
//! Provides two [`crate::domain::gateways::Clipboard`] implementations:
//! - [`SystemClipboard`] - Native clipboard via `arboard`
//! - [`NullClipboard`] - Fallback when no clipboard is available

mod null_clipboard;
mod system_clipboard;

pub use null_clipboard::NullClipboard;
pub use system_clipboard::SystemClipboard;
