//! JSON file implementation of the mapping store.
//!
//! The whole mapping table lives in one human-readable JSON document. Every
//! read decodes the full document, every write re-encodes and overwrites it.
//! A missing file is initialized to an empty document on first read; a
//! corrupted one is logged and treated as empty rather than failing the
//! request.

use async_trait::async_trait;
use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::domain::entities::{MappingTable, UrlMapping};
use crate::domain::repositories::MappingStore;
use crate::error::AppError;

/// File-backed store holding the mapping table as a single JSON object.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store persisting to `path`. The file is created with an
    /// empty document the first time it is read or written.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and decodes the full document.
    ///
    /// A missing file is initialized to an empty document before returning
    /// the empty table. Read and decode failures are recovered locally: the
    /// store logs a warning and returns an empty table, so a corrupted
    /// document never takes the service down. The next successful write
    /// replaces it.
    pub async fn load(&self) -> MappingTable {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let table = MappingTable::new();
                if let Err(e) = self.save(&table).await {
                    warn!(path = %self.path.display(), error = %e, "failed to initialize store file");
                }
                return table;
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read store, treating as empty");
                return MappingTable::new();
            }
        };

        // An empty or whitespace-only file decodes as an empty table.
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return MappingTable::new();
        }

        match serde_json::from_slice(&bytes) {
            Ok(table) => table,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to decode store, treating as empty");
                MappingTable::new()
            }
        }
    }

    /// Encodes `table` and overwrites the document in full.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the file cannot be written.
    pub async fn save(&self, table: &MappingTable) -> Result<(), AppError> {
        let json = serde_json::to_vec_pretty(table)
            .map_err(|e| AppError::internal(format!("Failed to encode store: {e}")))?;

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| AppError::internal(format!("Failed to persist store: {e}")))
    }
}

#[async_trait]
impl MappingStore for JsonFileStore {
    async fn get(&self, code: &str) -> Result<Option<UrlMapping>, AppError> {
        Ok(self.load().await.get(code).cloned())
    }

    async fn put(&self, code: &str, mapping: UrlMapping) -> Result<(), AppError> {
        let mut table = self.load().await;
        table.insert(code.to_string(), mapping);
        self.save(&table).await
    }

    async fn scan_for_value(&self, long_url: &str) -> Result<Option<String>, AppError> {
        let table = self.load().await;

        Ok(table
            .iter()
            .find(|(_, mapping)| mapping.long_url == long_url)
            .map(|(code, _)| code.clone()))
    }

    async fn codes(&self) -> Result<BTreeSet<String>, AppError> {
        Ok(self.load().await.into_keys().collect())
    }
}
