//! Display state written by the submission workflow and the redirect resolver.

use crate::domain::entities::ShortUrl;

/// Submit trigger label while idle.
pub const SUBMIT_LABEL: &str = "Short it";

/// Submit trigger label while a request is pending.
pub const SUBMIT_LABEL_PENDING: &str = "Shortening...";

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient notification (toast).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// What the display surface shows for one workflow instance.
///
/// The error slot and the short URL slot are mutually exclusive: setting one
/// clears the other.
#[derive(Debug, Clone, Default)]
pub struct DisplayState {
    error: Option<String>,
    short_url: Option<ShortUrl>,
    loading: bool,
    notices: Vec<Notice>,
}

impl DisplayState {
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn short_url(&self) -> Option<&ShortUrl> {
        self.short_url.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the submit trigger accepts input.
    pub fn is_submit_enabled(&self) -> bool {
        !self.loading
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            SUBMIT_LABEL_PENDING
        } else {
            SUBMIT_LABEL
        }
    }

    /// Whether the copy trigger is shown.
    pub fn is_copy_enabled(&self) -> bool {
        self.short_url.is_some()
    }

    /// Notifications not yet consumed by the display surface.
    pub fn pending_notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Removes and returns pending notifications.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub(crate) fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.short_url = None;
    }

    pub(crate) fn set_short_url(&mut self, short_url: ShortUrl) {
        self.short_url = Some(short_url);
        self.error = None;
    }

    /// Clears both result slots before a new attempt.
    pub(crate) fn clear_result(&mut self) {
        self.error = None;
        self.short_url = None;
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub(crate) fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
