//! API routes

use crate::api::handlers::{
    create_book, delete_book, get_book, get_stats, health_check, list_books, update_book, AppState,
};
use axum::{
    routing::get,
    Router,
};

/// Build the API routes
pub fn build_api_routes(state: AppState) -> Router {
    Router::new()
        // Book CRUD endpoints
        .route("/book", get(list_books).post(create_book))
        .route(
            "/book/:id",
            get(get_book).put(update_book).delete(delete_book),
        )
        // Service status endpoints
        .route("/health", get(health_check))
        .route("/stats", get(get_stats))
        .with_state(state)
}
