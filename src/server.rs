//! HTTP server initialization and runtime setup.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;

use crate::application::services::ShortenerService;
use crate::config::Config;
use crate::infrastructure::persistence::JsonFileStore;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::{CodeGenerator, MAX_COLLISION_ATTEMPTS};

/// Runs the HTTP server with the given configuration.
///
/// Wires the JSON file store, the code generator, and the shortener
/// service together and serves the router until the process exits.
///
/// # Errors
///
/// Returns an error if the listen address is invalid, the bind fails, or
/// the server runtime fails.
pub async fn run(config: Config) -> Result<()> {
    let store = Arc::new(JsonFileStore::new(&config.storage_file));
    tracing::info!(path = %config.storage_file, "using JSON file store");

    let generator = CodeGenerator::new(config.code_length, MAX_COLLISION_ATTEMPTS);
    let shortener = Arc::new(ShortenerService::new(store.clone(), generator));

    let state = AppState::new(shortener, store);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
