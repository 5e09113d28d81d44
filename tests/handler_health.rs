mod common;

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use axum_test::TestServer;
use minilink::api::handlers::{health_handler, shorten_handler};
use minilink::application::services::ShortenerService;
use minilink::domain::entities::UrlMapping;
use minilink::domain::repositories::MappingStore;
use minilink::error::AppError;
use minilink::state::AppState;
use minilink::utils::code_generator::CodeGenerator;
use serde_json::json;

/// Store whose every operation fails, for driving the degraded branch.
struct BrokenStore;

#[async_trait]
impl MappingStore for BrokenStore {
    async fn get(&self, _code: &str) -> Result<Option<UrlMapping>, AppError> {
        Err(AppError::internal("Failed to read store"))
    }

    async fn put(&self, _code: &str, _mapping: UrlMapping) -> Result<(), AppError> {
        Err(AppError::internal("Failed to persist store"))
    }

    async fn scan_for_value(&self, _long_url: &str) -> Result<Option<String>, AppError> {
        Err(AppError::internal("Failed to read store"))
    }

    async fn codes(&self) -> Result<BTreeSet<String>, AppError> {
        Err(AppError::internal("Failed to read store"))
    }
}

#[tokio::test]
async fn test_health_ok() {
    let (state, _dir) = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["storage"]["status"], "ok");
    assert!(json["checks"]["storage"]["message"].is_string());
}

#[tokio::test]
async fn test_health_reports_stored_mappings() {
    let (state, _dir) = common::create_test_state();
    let app = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    server
        .post("/shorten")
        .json(&json!({ "longUrl": "https://example.com" }))
        .await
        .assert_status_ok();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["checks"]["storage"]["message"], "1 mappings stored");
}

#[tokio::test]
async fn test_health_degraded_when_storage_fails() {
    let store = Arc::new(BrokenStore);
    let shortener = Arc::new(ShortenerService::new(
        store.clone(),
        CodeGenerator::default(),
    ));
    let state = AppState::new(shortener, store);

    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["storage"]["status"], "error");
    assert_eq!(json["checks"]["storage"]["message"], "Failed to read store");
}
