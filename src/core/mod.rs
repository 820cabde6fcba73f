//! Core application layer
//!
//! This module provides:
//! - Configuration management
//! - Structured logging system
//! - Error handling and type system
//! - Book attribute validation

pub mod config;
pub mod error;
pub mod logging;
pub mod validate;

pub use config::Config;
pub use error::{ErrorBody, Result, ShelfError};
pub use logging::Logger;
pub use validate::{validate, ValidationError, CHECKED_IN, CHECKED_OUT};
