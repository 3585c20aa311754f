//! HTTP/JSON client for the shortening service.

use crate::api::dto::{ErrorResponse, ShortenResponse};
use crate::domain::entities::ShortenRequest;
use crate::domain::gateways::ShortenerClient;
use crate::error::ShortenError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Path of the shortening endpoint relative to the service origin.
const SHORTEN_PATH: &str = "/shorten";

/// Shortening service client backed by `reqwest`.
///
/// Issues `POST <api_url>/shorten` with a JSON [`ShortenRequest`] body and
/// maps the answer onto [`ShortenError`]:
///
/// | Response | Result |
/// |---|---|
/// | 2xx with `shortUrl` | `Ok(short_url)` |
/// | 2xx with a missing or empty `shortUrl` | [`ShortenError::MalformedResponse`] |
/// | non-2xx with `{"error": "..."}` | [`ShortenError::Service`] |
/// | non-2xx otherwise | [`ShortenError::UnexpectedStatus`] |
/// | no response | [`ShortenError::Transport`] / [`ShortenError::Timeout`] |
pub struct HttpShortenerClient {
    http: Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpShortenerClient {
    /// Creates a client for the service at `api_url` (e.g. `http://localhost:3000`).
    ///
    /// Every request is aborted after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`reqwest::Error`] if the TLS backend cannot be initialised.
    pub fn new(api_url: &str, timeout: Duration) -> reqwest::Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        let endpoint = format!("{}{}", api_url.trim_end_matches('/'), SHORTEN_PATH);

        info!("Shortening service endpoint: {}", endpoint);

        Ok(Self {
            http,
            endpoint,
            timeout,
        })
    }

    /// Full URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn map_send_error(&self, err: reqwest::Error) -> ShortenError {
        if err.is_timeout() {
            ShortenError::Timeout(self.timeout)
        } else {
            ShortenError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl ShortenerClient for HttpShortenerClient {
    async fn shorten(&self, request: &ShortenRequest) -> Result<String, ShortenError> {
        debug!(endpoint = %self.endpoint, ?request, "Sending shorten request");

        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| self.map_send_error(e))?;

        if status.is_success() {
            let parsed: ShortenResponse = serde_json::from_slice(&body)
                .map_err(|e| ShortenError::MalformedResponse(e.to_string()))?;

            if parsed.short_url.is_empty() {
                warn!("Shortening service returned an empty shortUrl");
                return Err(ShortenError::MalformedResponse("empty shortUrl".to_string()));
            }

            debug!(short_url = %parsed.short_url, "Shorten request succeeded");
            return Ok(parsed.short_url);
        }

        match ErrorResponse::message_from(&body) {
            Some(message) => {
                warn!(status = status.as_u16(), %message, "Shortening service rejected request");
                Err(ShortenError::Service(message))
            }
            None => {
                warn!(status = status.as_u16(), "Shortening service returned no error payload");
                Err(ShortenError::UnexpectedStatus(status.as_u16()))
            }
        }
    }
}
