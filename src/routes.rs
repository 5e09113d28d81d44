//! Router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`  - Create a short code for a long URL
//! - `GET  /health`   - Storage health check
//! - `GET  /{code}`   - Short link redirect
//!
//! Requests are logged through `tower-http`'s trace layer and trailing
//! slashes are normalized.

use axum::{
    Router,
    routing::{get, post},
};
use tower::Layer;
use tower_http::LatencyUnit;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        );

    let router = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(trace);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
