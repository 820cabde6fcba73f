//! Error type system for Bookshelf
//!
//! This module provides the service error type with:
//! - HTTP status code mapping
//! - Axum `IntoResponse` integration producing the single-key error body

use crate::core::validate::ValidationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Main error type for the Bookshelf service
#[derive(Debug, thiserror::Error)]
pub enum ShelfError {
    // System-level errors
    #[error("configuration error: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("connection pool error: {0}")]
    Pool(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("task error: {0}")]
    Task(String),

    // Request-level errors; the Display strings are the wire messages
    #[error("invalid id")]
    InvalidId,

    #[error("invalid payload")]
    InvalidPayload,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("book not found")]
    NotFound,
}

impl ShelfError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // Client faults: malformed requests, validation failures and
            // missing records all surface as 400 per the API contract.
            ShelfError::InvalidId
            | ShelfError::InvalidPayload
            | ShelfError::Validation(_)
            | ShelfError::NotFound => StatusCode::BAD_REQUEST,

            // Everything else is a server-side failure.
            ShelfError::Config(_)
            | ShelfError::Database(_)
            | ShelfError::Pool(_)
            | ShelfError::Io(_)
            | ShelfError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Failure response body: a single-key object carrying the error message
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl IntoResponse for ShelfError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(status_code = %status_code, "request failed: {}", self);
        } else {
            tracing::warn!(status_code = %status_code, "request rejected: {}", self);
        }

        (status_code, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

/// Result type alias for operations that can fail with ShelfError
pub type Result<T> = std::result::Result<T, ShelfError>;
