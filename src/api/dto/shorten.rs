//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten one long URL.
///
/// `longUrl` is optional at the deserialization level so a missing field
/// reaches the validation gate and produces the `"URL is required"` error
/// instead of a generic body rejection.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    #[serde(rename = "longUrl", default)]
    pub long_url: Option<String>,
}

/// Response carrying the short code for the submitted URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    #[serde(rename = "shortUrl")]
    pub short_url: String,
}
