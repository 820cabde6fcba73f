//! Database schema bootstrap
//!
//! Applies schema versions in order, tracking the applied version in a
//! `schema_migrations` table so startup is idempotent.

use crate::core::error::{Result, ShelfError};
use rusqlite::Connection;
use tracing::info;

/// Migration version tracking table
const MIGRATION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER PRIMARY KEY,
    applied_at DATETIME DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Initial schema (version 1)
const MIGRATION_V1: &str = r#"
CREATE TABLE IF NOT EXISTS books (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    publisher TEXT NOT NULL,
    publishdate TEXT NOT NULL,
    rating INTEGER NOT NULL,
    status TEXT NOT NULL
);
"#;

/// Run all pending database migrations
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(MIGRATION_TABLE)
        .map_err(ShelfError::Database)?;

    let current_version: i64 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .map_err(ShelfError::Database)?;

    if current_version < 1 {
        info!("Applying migration v1: initial schema");
        apply_migration(conn, 1, MIGRATION_V1)?;
    }

    Ok(())
}

/// Apply a single migration and record its version
fn apply_migration(conn: &Connection, version: i64, sql: &str) -> Result<()> {
    conn.execute_batch(sql).map_err(ShelfError::Database)?;
    conn.execute(
        "INSERT OR IGNORE INTO schema_migrations (version) VALUES (?)",
        [version],
    )
    .map_err(ShelfError::Database)?;

    info!(version, "Migration applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_migrations_creates_books_table() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_version_recorded() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();

        let version: i64 = conn
            .query_row(
                "SELECT MAX(version) FROM schema_migrations",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(version, 1);
    }

    #[test]
    fn test_reruns_are_harmless() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();

        conn.execute(
            "INSERT INTO books (id, title, author, publisher, publishdate, rating, status) \
             VALUES ('b-1', 'T', 'A', 'P', '1969', 2, 'CheckedIn')",
            [],
        )
        .unwrap();

        run_migrations(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
