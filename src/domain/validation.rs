//! Client-side input validation.
//!
//! Both checks are pure and run before any network request is issued.
//! The long URL pattern is deliberately loose: it accepts scheme-less input
//! and hosts that may not resolve.

use regex::Regex;
use std::sync::LazyLock;

/// Optional `http`/`https` scheme, dot-terminated labels, a final label of at
/// least two word characters and an optional whitespace-free path.
static LONG_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?([A-Za-z0-9_-]+\.)+[A-Za-z0-9_]{2,}(/\S*)?$").unwrap()
});

/// Compiled regex for custom short identifiers.
static CUSTOM_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{1,9}$").unwrap());

/// Reason a submission was rejected before reaching the network.
///
/// The `Display` text is the exact message shown in the error slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a valid URL")]
    InvalidLongUrl,

    #[error("Custom ID must be alphanumeric and no longer than 9 characters.")]
    InvalidCustomId,
}

/// Outcome of a validation check: `Ok(())` is valid.
pub type ValidationResult = Result<(), ValidationError>;

/// Validates the long URL entered by the user.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidLongUrl`] if the input is empty or does
/// not look like a host with an optional scheme and path.
///
/// # Examples
///
/// ```
/// use url_shortener_client::domain::validation::validate_long_url;
///
/// assert!(validate_long_url("https://www.youtube.com/watch?v=Y4z3psSbMEo").is_ok());
/// assert!(validate_long_url("example.com").is_ok());
/// assert!(validate_long_url("invalid-url").is_err());
/// ```
pub fn validate_long_url(input: &str) -> ValidationResult {
    if input.is_empty() || !LONG_URL_REGEX.is_match(input) {
        return Err(ValidationError::InvalidLongUrl);
    }

    Ok(())
}

/// Validates the optional custom identifier.
///
/// An empty string means "not provided" and is always valid.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidCustomId`] if the input contains anything
/// other than ASCII letters and digits, or is longer than 9 characters.
pub fn validate_custom_id(input: &str) -> ValidationResult {
    if input.is_empty() {
        return Ok(());
    }

    if !CUSTOM_ID_REGEX.is_match(input) {
        return Err(ValidationError::InvalidCustomId);
    }

    Ok(())
}

/// Runs both checks in order, stopping at the first failure.
///
/// The custom id is never inspected when the long URL is rejected.
pub fn validate_submission(long_url: &str, custom_id: &str) -> ValidationResult {
    validate_long_url(long_url)?;
    validate_custom_id(custom_id)
}
