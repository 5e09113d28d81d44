//! Persistence adapters implementing the domain storage traits.

pub mod json_file_store;

pub use json_file_store::JsonFileStore;
