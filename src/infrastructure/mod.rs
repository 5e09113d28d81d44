//! Infrastructure layer: durable storage adapters.

pub mod persistence;
