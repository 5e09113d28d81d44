//! Repository trait for short URL mapping storage.

use crate::domain::entities::UrlMapping;
use crate::error::AppError;
use async_trait::async_trait;
use std::collections::BTreeSet;

/// Narrow storage interface for the mapping table.
///
/// Implementations keep the entire table in a single durable document.
/// Every call observes the latest committed state; callers that need a
/// consistent read-modify-write cycle must serialize access themselves
/// (see [`crate::application::services::ShortenerService`]).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonFileStore`] - JSON file backend
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// Looks up a mapping by its short code. Exact, case-sensitive match.
    ///
    /// A miss is a normal outcome and returns `Ok(None)`.
    async fn get(&self, code: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Inserts a mapping and persists the full document.
    ///
    /// The caller must have already ensured `code` is unused and the long
    /// URL is not mapped elsewhere, otherwise an existing entry is
    /// silently replaced.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the document cannot be written.
    async fn put(&self, code: &str, mapping: UrlMapping) -> Result<(), AppError>;

    /// Reverse lookup: finds the short code mapped to `long_url`, if any.
    ///
    /// Linear scan with exact string comparison, no normalization.
    async fn scan_for_value(&self, long_url: &str) -> Result<Option<String>, AppError>;

    /// Returns every short code currently in the store.
    ///
    /// Used as the collision set for code generation.
    async fn codes(&self) -> Result<BTreeSet<String>, AppError>;
}
