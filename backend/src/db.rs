use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::Connection;
use std::path::{Path, PathBuf};
use tracing::info;

// The database file for the production database
const DEFAULT_DB_PATH: &str = "data/personal_info.db";

/// DbConnection owns the database file and its schema.
///
/// Every operation runs on its own short-lived connection: callers `connect()`,
/// execute, and drop the connection before returning. Nothing is pooled or
/// held between calls, so the database file is released on every exit path.
#[derive(Clone)]
pub struct DbConnection {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl DbConnection {
    /// Open (creating if missing) the database at the given path.
    ///
    /// The parent directory is created when absent and the schema is
    /// initialized before the connection is handed to callers.
    pub async fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        // Create the data directory if it doesn't exist
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);

        let db = Self { path, options };

        // Setup database schema
        db.initialize().await?;

        info!("Database ready at {}", db.path.display());
        Ok(db)
    }

    /// Open the standard database location
    pub async fn init() -> Result<Self> {
        Self::new(DEFAULT_DB_PATH).await
    }

    /// Path of the underlying database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh connection for a single operation
    pub async fn connect(&self) -> Result<SqliteConnection, sqlx::Error> {
        SqliteConnection::connect_with(&self.options).await
    }

    /// Set up the required database schema.
    ///
    /// Safe to call on every startup; existing tables are left alone.
    pub async fn initialize(&self) -> Result<(), sqlx::Error> {
        let mut conn = self.connect().await?;

        // Create the records table if it doesn't exist
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS personal_info (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                category TEXT,
                notes TEXT,
                priority TEXT,
                status TEXT,
                tags TEXT,
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(&mut conn)
        .await?;

        // Create index for ordering by created_at (newest first)
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_personal_info_created_at
            ON personal_info(created_at DESC);
            "#,
        )
        .execute(&mut conn)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_creates_database_and_parent_directory() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = dir.path().join("data").join("personal_info.db");

        let db = DbConnection::new(&db_path)
            .await
            .expect("Failed to create database");

        assert!(db_path.exists(), "Database file should have been created");
        assert_eq!(db.path(), db_path.as_path());

        // Table should exist and start empty
        let mut conn = db.connect().await.expect("Failed to connect");
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM personal_info")
            .fetch_one(&mut conn)
            .await
            .expect("Failed to count rows");
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = dir.path().join("records.db");

        let db = DbConnection::new(&db_path)
            .await
            .expect("Failed to create database");

        // Insert a row, then re-run initialization
        let mut conn = db.connect().await.expect("Failed to connect");
        sqlx::query(
            "INSERT INTO personal_info (title, category, notes, priority, status, tags, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind("kept")
        .bind("other")
        .bind("")
        .bind("low")
        .bind("completed")
        .bind("")
        .bind("2024-01-01T00:00:00.000000Z")
        .execute(&mut conn)
        .await
        .expect("Failed to insert row");
        drop(conn);

        db.initialize().await.expect("Re-initialization failed");

        // Opening the same file again must not touch existing data either
        let db_again = DbConnection::new(&db_path)
            .await
            .expect("Failed to reopen database");
        let mut conn = db_again.connect().await.expect("Failed to connect");
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM personal_info")
            .fetch_one(&mut conn)
            .await
            .expect("Failed to count rows");
        assert_eq!(count, 1, "Existing rows should survive re-initialization");
    }
}
