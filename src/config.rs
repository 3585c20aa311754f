//! Client configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the workflow
//! starts. Command-line flags may override individual values.
//!
//! ```bash
//! export SHORTENER_API_URL="http://localhost:3000"
//! export SHORT_URL_ORIGIN="https://"
//! export REQUEST_TIMEOUT_SECS="10"
//! ```
//!
//! ## Optional Variables
//!
//! - `SHORTENER_API_URL` - Shortening service origin (default: `http://localhost:3000`)
//! - `SHORT_URL_ORIGIN` - Prefix shown in front of returned short URLs (default: `https://`)
//! - `REQUEST_TIMEOUT_SECS` - Request timeout in seconds (default: 10, range: 1-300)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use validator::Validate;

use crate::domain::entities::DEFAULT_DISPLAY_ORIGIN;

/// Default shortening service origin.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, Validate)]
pub struct Config {
    /// Origin of the shortening service; requests go to `<api_url>/shorten`.
    #[validate(url(message = "SHORTENER_API_URL must be a valid URL"))]
    pub api_url: String,
    /// Prefix placed in front of service-assigned short URLs.
    #[validate(length(min = 1, message = "SHORT_URL_ORIGIN must not be empty"))]
    pub short_url_origin: String,
    #[validate(range(min = 1, max = 300, message = "REQUEST_TIMEOUT_SECS must be between 1 and 300"))]
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `REQUEST_TIMEOUT_SECS` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let api_url = env::var("SHORTENER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let short_url_origin =
            env::var("SHORT_URL_ORIGIN").unwrap_or_else(|_| DEFAULT_DISPLAY_ORIGIN.to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let request_timeout_secs = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("REQUEST_TIMEOUT_SECS must be a number, got '{value}'"))?,
            Err(_) => 10,
        };

        Ok(Self {
            api_url,
            short_url_origin,
            request_timeout_secs,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `api_url` is not an `http`/`https` URL
    /// - `short_url_origin` is empty
    /// - `request_timeout_secs` is outside 1-300
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self).context("Invalid configuration")?;

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            anyhow::bail!(
                "SHORTENER_API_URL must start with 'http://' or 'https://', got '{}'",
                self.api_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Shortening service: {}", self.api_url);
        tracing::info!("  Short URL origin: {}", self.short_url_origin);
        tracing::info!("  Request timeout: {}s", self.request_timeout_secs);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
