//! Short URL creation and resolution service.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::MappingStore;
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;

/// Service owning the shorten and resolve operations.
///
/// Wraps the storage adapter with a single async mutex so that each
/// create cycle (reverse lookup, generate, insert) runs against a
/// consistent snapshot. Without it two concurrent writers could load the
/// same document and the second full-document write would drop the first
/// insertion.
pub struct ShortenerService {
    store: Arc<dyn MappingStore>,
    generator: CodeGenerator,
    write_lock: Mutex<()>,
}

impl ShortenerService {
    pub fn new(store: Arc<dyn MappingStore>, generator: CodeGenerator) -> Self {
        Self {
            store,
            generator,
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the short code for `long_url`, creating it if needed.
    ///
    /// # Idempotence
    ///
    /// A URL that is already mapped returns its existing code; repeated
    /// calls with the same URL always yield the same code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if code generation exhausts its retry
    /// bound or the store cannot be persisted.
    pub async fn create_short_url(&self, long_url: &str) -> Result<String, AppError> {
        let _guard = self.write_lock.lock().await;

        if let Some(code) = self.store.scan_for_value(long_url).await? {
            return Ok(code);
        }

        let taken = self.store.codes().await?;
        let code = self.generator.generate(long_url, &taken)?;

        self.store.put(&code, UrlMapping::new(long_url)).await?;
        info!(code = %code, "created short url");

        Ok(code)
    }

    /// Resolves a short code to its long URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the code has no mapping.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        match self.store.get(code).await? {
            Some(mapping) => Ok(mapping.long_url),
            None => Err(AppError::not_found("Short URL not found")),
        }
    }
}
