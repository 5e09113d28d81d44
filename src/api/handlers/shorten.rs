//! Handler for the shorten endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::validate::validate_url_input;

/// Creates (or returns the existing) short code for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "longUrl": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "shortUrl": "2Wn7Xr" }
/// ```
///
/// Shortening the same URL again returns the same code with the same 200
/// response as the first call.
///
/// # Errors
///
/// Returns 400 with `"URL is required"` when `longUrl` is missing or empty,
/// or `"Invalid URL"` when it does not parse as an absolute URL.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let long_url = validate_url_input(payload.long_url.as_deref())?;

    let short_url = state.shortener.create_short_url(long_url).await?;

    Ok(Json(ShortenResponse { short_url }))
}
