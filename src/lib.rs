//! Bookshelf Library
//!
//! This library provides the Bookshelf service: a REST API exposing CRUD
//! operations over book records, backed by an embedded document store.

pub mod api;
pub mod core;
pub mod db;

// Re-export commonly used types
pub use api::ApiServer;
pub use crate::core::{Config, ShelfError};
pub use db::DatabaseManager;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
