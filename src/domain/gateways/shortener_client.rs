//! Gateway trait for the remote shortening service.

use crate::domain::entities::ShortenRequest;
use crate::error::ShortenError;
use async_trait::async_trait;

/// Client for the shortening service.
///
/// The service is a black box: it accepts a [`ShortenRequest`] and answers
/// with a short URL string or an error.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpShortenerClient`] - HTTP/JSON implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortenerClient: Send + Sync {
    /// Requests a short URL for `request.long_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::Service`] when the service reports a structured
    /// error, and another [`ShortenError`] variant when the request could not
    /// be completed or the response could not be understood.
    async fn shorten(&self, request: &ShortenRequest) -> Result<String, ShortenError>;
}
