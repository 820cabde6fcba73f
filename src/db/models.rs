//! Database models
//!
//! Data structures representing database tables

use serde::{Deserialize, Serialize};

/// Book record in the database.
///
/// The JSON shape matches the stored shape field for field; `id` is the
/// primary key, assigned by the service on creation and immutable after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub publisher: String,
    #[serde(rename = "publishdate")]
    pub publish_date: String,
    pub rating: i64,
    pub status: String,
}
