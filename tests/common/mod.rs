#![allow(dead_code)]

use std::sync::Arc;

use minilink::application::services::ShortenerService;
use minilink::infrastructure::persistence::JsonFileStore;
use minilink::state::AppState;
use minilink::utils::code_generator::CodeGenerator;
use tempfile::TempDir;

/// Builds an [`AppState`] backed by a JSON store inside a fresh temp
/// directory. The directory must be kept alive for the duration of the
/// test.
pub fn create_test_state() -> (AppState, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(JsonFileStore::new(dir.path().join("urlStorage.json")));

    let shortener = Arc::new(ShortenerService::new(
        store.clone(),
        CodeGenerator::default(),
    ));

    (AppState::new(shortener, store), dir)
}
