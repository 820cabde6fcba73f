//! Repository pattern implementation for the data access layer
//!
//! Each operation maps to exactly one statement against the `books` table
//! and runs through `DatabaseManager::execute` on the blocking pool.

use crate::core::error::{Result, ShelfError};
use crate::db::manager::DatabaseManager;
use crate::db::models::Book;
use async_trait::async_trait;
use rusqlite::{OptionalExtension, Row};
use std::sync::Arc;

/// Generic repository trait for CRUD operations
#[async_trait]
pub trait Repository<T>: Send + Sync {
    /// Find an entity by its ID
    async fn find_by_id(&self, id: &str) -> Result<Option<T>>;

    /// Find all entities
    async fn find_all(&self) -> Result<Vec<T>>;

    /// Create a new entity; the caller has already assigned a fresh ID
    async fn create(&self, entity: &T) -> Result<()>;

    /// Replace an existing entity, keyed by its ID
    async fn update(&self, entity: &T) -> Result<()>;

    /// Delete an entity by its ID
    async fn delete(&self, id: &str) -> Result<()>;
}

const BOOK_COLUMNS: &str = "id, title, author, publisher, publishdate, rating, status";

fn book_from_row(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        publisher: row.get(3)?,
        publish_date: row.get(4)?,
        rating: row.get(5)?,
        status: row.get(6)?,
    })
}

/// Repository for Book entities
pub struct BookRepository {
    db: Arc<DatabaseManager>,
}

impl BookRepository {
    /// Create a new BookRepository over an injected database handle
    pub fn new(db: Arc<DatabaseManager>) -> Self {
        Self { db }
    }

    /// Get a reference to the database manager
    pub fn db(&self) -> &Arc<DatabaseManager> {
        &self.db
    }

    /// Count stored books
    pub async fn count(&self) -> Result<usize> {
        self.db
            .execute(|conn| {
                conn.query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))
                    .map_err(ShelfError::Database)
            })
            .await
    }
}

#[async_trait]
impl Repository<Book> for BookRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Book>> {
        let id = id.to_string();
        self.db
            .execute(move |conn| {
                conn.query_row(
                    &format!("SELECT {} FROM books WHERE id = ?", BOOK_COLUMNS),
                    [&id],
                    book_from_row,
                )
                .optional()
                .map_err(ShelfError::Database)
            })
            .await
    }

    async fn find_all(&self) -> Result<Vec<Book>> {
        self.db
            .execute(|conn| {
                let mut stmt = conn
                    .prepare(&format!("SELECT {} FROM books", BOOK_COLUMNS))
                    .map_err(ShelfError::Database)?;

                let books = stmt
                    .query_map([], book_from_row)
                    .map_err(ShelfError::Database)?
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(ShelfError::Database)?;

                Ok(books)
            })
            .await
    }

    async fn create(&self, book: &Book) -> Result<()> {
        let book = book.clone();
        self.db
            .execute(move |conn| {
                conn.execute(
                    "INSERT INTO books (id, title, author, publisher, publishdate, rating, status) \
                     VALUES (?, ?, ?, ?, ?, ?, ?)",
                    rusqlite::params![
                        &book.id,
                        &book.title,
                        &book.author,
                        &book.publisher,
                        &book.publish_date,
                        book.rating,
                        &book.status,
                    ],
                )
                .map_err(ShelfError::Database)?;
                Ok(())
            })
            .await
    }

    async fn update(&self, book: &Book) -> Result<()> {
        let book = book.clone();
        self.db
            .execute(move |conn| {
                let changed = conn
                    .execute(
                        "UPDATE books SET title = ?, author = ?, publisher = ?, \
                         publishdate = ?, rating = ?, status = ? WHERE id = ?",
                        rusqlite::params![
                            &book.title,
                            &book.author,
                            &book.publisher,
                            &book.publish_date,
                            book.rating,
                            &book.status,
                            &book.id,
                        ],
                    )
                    .map_err(ShelfError::Database)?;

                if changed == 0 {
                    return Err(ShelfError::NotFound);
                }
                Ok(())
            })
            .await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let id = id.to_string();
        self.db
            .execute(move |conn| {
                let changed = conn
                    .execute("DELETE FROM books WHERE id = ?", [&id])
                    .map_err(ShelfError::Database)?;

                if changed == 0 {
                    return Err(ShelfError::NotFound);
                }
                Ok(())
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validate::CHECKED_IN;

    fn test_repo() -> BookRepository {
        let db = Arc::new(DatabaseManager::new_in_memory().unwrap());
        BookRepository::new(db)
    }

    fn sample_book(id: &str) -> Book {
        Book {
            id: id.to_string(),
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            publisher: "Chilton Books".to_string(),
            publish_date: "1965".to_string(),
            rating: 3,
            status: CHECKED_IN.to_string(),
        }
    }

    #[tokio::test]
    async fn test_find_all_empty() {
        let repo = test_repo();
        let books = repo.find_all().await.unwrap();
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn test_create_then_find_round_trip() {
        let repo = test_repo();
        let book = sample_book("b-1");

        repo.create(&book).await.unwrap();

        let found = repo.find_by_id("b-1").await.unwrap().unwrap();
        assert_eq!(found, book);

        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![book]);
    }

    #[tokio::test]
    async fn test_find_unknown_id_returns_none() {
        let repo = test_repo();
        assert!(repo.find_by_id("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let repo = test_repo();
        let book = sample_book("b-1");

        repo.create(&book).await.unwrap();
        let err = repo.create(&book).await.unwrap_err();
        assert!(matches!(err, ShelfError::Database(_)));
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let repo = test_repo();
        let mut book = sample_book("b-1");
        repo.create(&book).await.unwrap();

        book.title = "Dune Messiah".to_string();
        book.publish_date = "1969".to_string();
        book.rating = 2;
        repo.update(&book).await.unwrap();

        let found = repo.find_by_id("b-1").await.unwrap().unwrap();
        assert_eq!(found, book);
    }

    #[tokio::test]
    async fn test_update_missing_id_fails() {
        let repo = test_repo();
        let err = repo.update(&sample_book("ghost")).await.unwrap_err();
        assert!(matches!(err, ShelfError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_then_find() {
        let repo = test_repo();
        let book = sample_book("b-1");
        repo.create(&book).await.unwrap();

        repo.delete("b-1").await.unwrap();

        assert!(repo.find_by_id("b-1").await.unwrap().is_none());
        let err = repo.delete("b-1").await.unwrap_err();
        assert!(matches!(err, ShelfError::NotFound));
    }

    #[tokio::test]
    async fn test_count() {
        let repo = test_repo();
        assert_eq!(repo.count().await.unwrap(), 0);

        repo.create(&sample_book("b-1")).await.unwrap();
        repo.create(&sample_book("b-2")).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);
    }
}
