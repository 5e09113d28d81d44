//! Utility modules for code generation and input validation.
//!
//! - [`code_generator`] - Deterministic short code derivation
//! - [`validate`] - URL input validation for the shorten endpoint

pub mod code_generator;
pub mod validate;
