//! Outbound shortening request.

use serde::{Deserialize, Serialize};

/// Body of `POST /shorten`.
///
/// `customId` is omitted from the JSON entirely when no custom id was
/// provided; it is never sent as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    pub long_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
}

impl ShortenRequest {
    /// Builds a request from raw form inputs. An empty custom id means none.
    pub fn new(long_url: impl Into<String>, custom_id: &str) -> Self {
        Self {
            long_url: long_url.into(),
            custom_id: (!custom_id.is_empty()).then(|| custom_id.to_string()),
        }
    }
}
