//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::domain::repositories::MappingStore;

/// Handler-visible application state.
///
/// The store is exposed alongside the service so the health check can probe
/// storage directly without going through shorten/resolve semantics.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    pub store: Arc<dyn MappingStore>,
}

impl AppState {
    pub fn new(shortener: Arc<ShortenerService>, store: Arc<dyn MappingStore>) -> Self {
        Self { shortener, store }
    }
}
