//! Error signals delivered through the page URL after a failed redirect.
//!
//! When a short link cannot be resolved, the redirect service sends the user
//! back to this workflow with an `error` query parameter. The page context is
//! parsed once and handed to the workflow at mount time.

use url::{Url, form_urlencoded};

/// Query parameter carrying the redirect error category.
pub const ERROR_PARAM: &str = "error";

/// Query parameters of the URL the workflow was opened at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    params: Vec<(String, String)>,
}

impl PageContext {
    /// Parses a raw query string, with or without the leading `?`.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let params = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();

        Self { params }
    }

    /// Parses the query string of a full page URL.
    ///
    /// # Errors
    ///
    /// Returns [`url::ParseError`] if `page_url` is not an absolute URL.
    pub fn from_url(page_url: &str) -> Result<Self, url::ParseError> {
        let url = Url::parse(page_url)?;
        Ok(Self::from_query(url.query().unwrap_or_default()))
    }

    /// Returns the first value of a query parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Recognised redirect error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectError {
    /// `error=invalid-url`: the short link does not exist.
    InvalidShortUrl,
    /// `error=server-error`: the redirect service failed.
    ServerError,
}

impl RedirectError {
    /// Maps a query parameter value to a category. Unknown values yield `None`.
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "invalid-url" => Some(Self::InvalidShortUrl),
            "server-error" => Some(Self::ServerError),
            _ => None,
        }
    }

    /// Reads the redirect error signal from a page context.
    pub fn resolve(context: &PageContext) -> Option<Self> {
        context.param(ERROR_PARAM).and_then(Self::from_param)
    }

    /// Message written into the error slot, if this category sets one.
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::InvalidShortUrl => Some("URL not found"),
            Self::ServerError => None,
        }
    }

    /// Transient notification text.
    pub fn notification(&self) -> &'static str {
        match self {
            Self::InvalidShortUrl => "Invalid short URL. Please check and try again.",
            Self::ServerError => "Server error. Please try again later.",
        }
    }
}
