//! Clipboard fallback for environments without a native clipboard.

use crate::domain::gateways::Clipboard;
use crate::error::ClipboardError;
use tracing::debug;

/// A clipboard that rejects every write.
///
/// Used when [`super::SystemClipboard::connect`] fails at startup, so copy
/// attempts are reported and logged instead of silently succeeding.
pub struct NullClipboard {
    reason: String,
}

impl NullClipboard {
    pub fn new(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        debug!("Using NullClipboard ({})", reason);
        Self { reason }
    }
}

impl Clipboard for NullClipboard {
    fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable(self.reason.clone()))
    }
}
