//! Error types shared across the workflow layers.
//!
//! Local input validation errors live next to the rules that produce them in
//! [`crate::domain::validation`].

use std::time::Duration;

/// Message displayed when the shortening service gives no usable explanation.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Failure of a request to the remote shortening service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortenError {
    /// The service answered with a structured `{"error": "..."}` payload.
    #[error("{0}")]
    Service(String),

    /// The service answered with a non-success status and no usable payload.
    #[error("Unexpected response status: {0}")]
    UnexpectedStatus(u16),

    /// The service answered with success but the body could not be read.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The request could not be completed (connection refused, DNS, TLS...).
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
}

impl ShortenError {
    /// Returns the message shown to the user for this failure.
    ///
    /// Only a non-empty service-provided message is used verbatim; every
    /// other failure collapses to [`FALLBACK_ERROR_MESSAGE`].
    pub fn display_message(&self) -> String {
        match self {
            ShortenError::Service(message) if !message.is_empty() => message.clone(),
            _ => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Failure to write to the system clipboard.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard is unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write to clipboard: {0}")]
    Write(String),
}
