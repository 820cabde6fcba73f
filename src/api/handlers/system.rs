//! Service status handlers

use crate::core::error::Result;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use super::AppState;

/// Handler for GET /health - liveness check
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().timestamp(),
    }))
}

/// Handler for GET /stats - collection statistics
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let books = state.book_repo.count().await?;

    Ok(Json(json!({ "books": books })))
}
