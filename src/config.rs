//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Full bind address (default: `0.0.0.0:<PORT>`)
//! - `PORT` - Listener port when `LISTEN` is not set (default: `3000`)
//! - `STORAGE_FILE` - Path of the JSON store document (default: `urlStorage.json`)
//! - `CODE_LENGTH` - Minimum short code width (default: `6`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Path of the single JSON document holding the whole mapping table.
    pub storage_file: String,
    /// Minimum width of generated short codes.
    pub code_length: usize,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables, applying defaults
    /// for anything unset.
    pub fn from_env() -> Self {
        let port: u16 = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| format!("0.0.0.0:{port}"));

        let storage_file =
            env::var("STORAGE_FILE").unwrap_or_else(|_| "urlStorage.json".to_string());

        let code_length = env::var("CODE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(crate::utils::code_generator::CODE_MIN_LENGTH);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            listen_addr,
            storage_file,
            code_length,
            log_level,
            log_format,
        }
    }
}
