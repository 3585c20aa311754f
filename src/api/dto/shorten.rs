//! Response payloads of the shortening endpoint.

use serde::Deserialize;
use serde_json::Value;

/// Successful response of `POST /shorten`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
}

/// Error response of `POST /shorten`.
///
/// `error` is kept as a raw value since some services send a nested object
/// instead of a string.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<Value>,
}

impl ErrorResponse {
    /// Returns the `error` text, if it is a string.
    pub fn message(&self) -> Option<&str> {
        self.error.as_ref()?.as_str()
    }

    /// Extracts the `error` string from a raw response body.
    ///
    /// Returns `None` when the body is not a JSON object or `error` is missing
    /// or not a string (for example a nested error object).
    pub fn message_from(body: &[u8]) -> Option<String> {
        let response: ErrorResponse = serde_json::from_slice(body).ok()?;
        response.message().map(str::to_string)
    }
}
