//! Short URL value returned by the shortening service.

use std::fmt;
use url::Url;

/// Default prefix placed in front of service-assigned short URLs.
pub const DEFAULT_DISPLAY_ORIGIN: &str = "https://";

/// A service-assigned short URL combined with its display origin.
///
/// The service typically returns a scheme-less value such as
/// `short.ly/abc123`; the link shown to the user (and copied to the
/// clipboard) is that value prefixed with the display origin. Values that
/// already carry an `http`/`https` scheme are shown unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrl {
    id: String,
    link: String,
}

impl ShortUrl {
    pub fn new(id: impl Into<String>, display_origin: &str) -> Self {
        let id = id.into();
        let link = if has_http_scheme(&id) {
            id.clone()
        } else {
            format!("{display_origin}{id}")
        };

        Self { id, link }
    }

    /// The value exactly as returned by the service.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The full link shown to the user.
    pub fn link(&self) -> &str {
        &self.link
    }
}

impl fmt::Display for ShortUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.link)
    }
}

fn has_http_scheme(value: &str) -> bool {
    Url::parse(value).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}
