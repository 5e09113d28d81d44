//! Entities describing the short code to long URL mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The value side of a shortened URL entry.
///
/// The short code itself is the key of the surrounding [`MappingTable`], so
/// the entity carries only the original URL and its creation time. Field
/// names are camelCase on the wire and in the persisted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlMapping {
    #[serde(rename = "longUrl")]
    pub long_url: String,
    /// Set once at creation, never updated afterwards.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a mapping for `long_url` timestamped with the current time.
    pub fn new(long_url: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
            created_at: Utc::now(),
        }
    }
}

/// The full store contents: an ordered map from short code to mapping.
///
/// This is also the shape of the persisted JSON document, one object with a
/// key per short code.
pub type MappingTable = BTreeMap<String, UrlMapping>;
