//! Book CRUD handlers
//!
//! Each handler makes a single pass: parse, validate, one store call,
//! respond. Success responses carry the record (or record list) directly;
//! failures surface as `ShelfError` and render as `{"error": message}`.

use crate::api::models::BookPayload;
use crate::core::error::{Result, ShelfError};
use crate::core::validate::validate;
use crate::db::repository::Repository;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tracing::{debug, info};
use uuid::Uuid;

use super::AppState;

/// Handler for GET /book - list all books
pub async fn list_books(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let books = state.book_repo.find_all().await?;
    debug!(count = books.len(), "retrieved all books");

    Ok(Json(books))
}

/// Handler for GET /book/:id - get one book
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let book = state
        .book_repo
        .find_by_id(&id)
        .await?
        .ok_or(ShelfError::InvalidId)?;
    debug!(id = %book.id, "retrieved book");

    Ok(Json(book))
}

/// Handler for POST /book - create a book.
///
/// Decodes the payload, validates it, assigns a fresh id and inserts.
pub async fn create_book(
    State(state): State<AppState>,
    payload: std::result::Result<Json<BookPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload.map_err(|_| ShelfError::InvalidPayload)?;

    let book = payload.into_book(Uuid::new_v4().to_string());
    validate(&book)?;

    state.book_repo.create(&book).await?;
    info!(id = %book.id, "created book");

    Ok(Json(book))
}

/// Handler for PUT /book/:id - replace a book.
///
/// The stored id is recovered from the existing record when one exists;
/// lookup failure is deliberately ignored here so a miss surfaces as the
/// store's not-found on the replace itself.
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<BookPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let id = match state.book_repo.find_by_id(&id).await {
        Ok(Some(existing)) => existing.id,
        _ => id,
    };

    let Json(payload) = payload.map_err(|_| ShelfError::InvalidPayload)?;

    let book = payload.into_book(id);
    validate(&book)?;

    state.book_repo.update(&book).await?;
    info!(id = %book.id, "updated book");

    Ok(Json(book))
}

/// Handler for DELETE /book/:id - remove a book.
///
/// Existence is confirmed first so an unknown id reports "invalid id"
/// rather than a bare store error.
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let book = state
        .book_repo
        .find_by_id(&id)
        .await?
        .ok_or(ShelfError::InvalidId)?;

    state.book_repo.delete(&book.id).await?;
    info!(id = %book.id, "deleted book");

    Ok(Json(json!({ "result": "success" })))
}
