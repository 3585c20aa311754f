//! Entities flowing through a single submission.
//!
//! - [`ShortenRequest`] - The body sent to the shortening service
//! - [`ShortUrl`] - The service-assigned short URL with its display origin

pub mod short_url;
pub mod shorten_request;

pub use short_url::{DEFAULT_DISPLAY_ORIGIN, ShortUrl};
pub use shorten_request::ShortenRequest;
