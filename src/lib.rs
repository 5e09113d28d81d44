//! # minilink
//!
//! A minimal URL shortening service: deterministic short codes backed by a
//! single JSON document.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - The `UrlMapping` entity and the
//!   `MappingStore` storage trait
//! - **Application Layer** ([`application`]) - The shortener service
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON file persistence
//! - **API Layer** ([`api`]) - Axum handlers and DTOs
//!
//! ## Behavior
//!
//! Short codes are derived from a SHA-256 hash of the long URL and encoded
//! in base-62 at a minimum width of six characters, so shortening the same
//! URL twice returns the same code. The whole mapping table persists as one
//! human-readable JSON file, rewritten in full on every mutation.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional configuration
//! export PORT=3000
//! export STORAGE_FILE=urlStorage.json
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortenerService;
    pub use crate::domain::entities::{MappingTable, UrlMapping};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::JsonFileStore;
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::CodeGenerator;
}
