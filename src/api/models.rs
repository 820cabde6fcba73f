//! API request models

use crate::db::models::Book;
use serde::{Deserialize, Serialize};

/// Request body for creating or replacing a book; the id always comes from
/// the service, never from the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookPayload {
    pub title: String,
    pub author: String,
    pub publisher: String,
    #[serde(rename = "publishdate")]
    pub publish_date: String,
    pub rating: i64,
    pub status: String,
}

impl BookPayload {
    /// Build the domain record with the given id
    pub fn into_book(self, id: String) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            publisher: self.publisher,
            publish_date: self.publish_date,
            rating: self.rating,
            status: self.status,
        }
    }
}
