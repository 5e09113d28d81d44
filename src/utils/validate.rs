//! URL input validation for the shorten endpoint.
//!
//! Syntactic validity is the only criterion: the input must be present,
//! non-empty, and parseable as an absolute URL. Content filtering is out of
//! scope.

use crate::error::AppError;
use url::Url;

/// Validates the `longUrl` field of a shorten request.
///
/// # Errors
///
/// Returns [`AppError::Validation`] with:
///
/// - `"URL is required"` when the field is missing or empty
/// - `"Invalid URL"` when the value does not parse as an absolute URL
pub fn validate_url_input(long_url: Option<&str>) -> Result<&str, AppError> {
    let long_url = match long_url {
        Some(value) if !value.is_empty() => value,
        _ => return Err(AppError::bad_request("URL is required")),
    };

    if Url::parse(long_url).is_err() {
        return Err(AppError::bad_request("Invalid URL"));
    }

    Ok(long_url)
}
