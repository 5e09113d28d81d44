//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Responds with `302 Found` and a `Location` header pointing at the stored
/// long URL.
///
/// # Errors
///
/// Returns 404 with `"Short URL not found"` when the code has no mapping.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.shortener.resolve(&code).await?;

    debug!(code = %code, location = %long_url, "redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, long_url)]))
}
