//! # URL Shortener Client
//!
//! Terminal client for a URL shortening service: validates the long URL and
//! optional custom id, submits them, shows the short URL and copies it to the
//! clipboard.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Validation rules, entities and gateway traits
//! - **Application Layer** ([`application`]) - The submission workflow and its display state
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP client and system clipboard
//! - **API Layer** ([`api`]) - Wire payloads of the shortening service
//! - **Terminal Layer** ([`terminal`]) - Text rendering of the display state
//!
//! ## Features
//!
//! - Client-side validation before any request is sent
//! - Single in-flight request per workflow, with a request timeout
//! - Error messages taken from the service when it provides one
//! - Redirect error handling (`?error=invalid-url`, `?error=server-error`)
//! - Copy to clipboard
//!
//! ## Quick Start
//!
//! ```bash
//! export SHORTENER_API_URL="http://localhost:3000"
//!
//! # One-shot
//! cargo run -- shorten https://www.youtube.com/watch?v=Y4z3psSbMEo --copy
//!
//! # Interactive
//! cargo run -- interactive
//! ```
//!
//! ## Configuration
//!
//! Client configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;
pub mod terminal;

pub mod config;

pub use error::{ClipboardError, ShortenError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        DisplayState, Notice, NoticeLevel, Submission, SubmissionService, SubmissionState,
        WorkflowSettings,
    };
    pub use crate::domain::entities::{ShortUrl, ShortenRequest};
    pub use crate::domain::gateways::{Clipboard, ShortenerClient};
    pub use crate::domain::redirect_error::{PageContext, RedirectError};
    pub use crate::domain::validation::{
        ValidationError, validate_custom_id, validate_long_url,
    };
    pub use crate::error::{ClipboardError, ShortenError};
    pub use crate::infrastructure::http::HttpShortenerClient;
}
