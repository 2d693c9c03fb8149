use sqlx::Row;

use crate::db::DbConnection;
use shared::{CreateRecordRequest, Priority, Record, RecordStats, Status, UpdateRecordRequest};

/// Repository for record operations on the `personal_info` table.
///
/// Every statement is parameter-bound; no SQL is ever built from user input.
/// Errors are reported as raw `sqlx::Error` so the domain layer can classify
/// storage failures separately from validation and not-found conditions.
#[derive(Clone)]
pub struct RecordRepository {
    db: DbConnection,
}

impl RecordRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Insert a record and return the id SQLite assigned to it.
    ///
    /// `created_at` is assigned by the caller (the service) exactly once;
    /// the repository never generates timestamps itself.
    pub async fn insert_record(
        &self,
        request: &CreateRecordRequest,
        created_at: &str,
    ) -> Result<i64, sqlx::Error> {
        let mut conn = self.db.connect().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO personal_info (title, category, notes, priority, status, tags, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&request.title)
        .bind(&request.category)
        .bind(&request.notes)
        .bind(&request.priority)
        .bind(&request.status)
        .bind(&request.tags)
        .bind(created_at)
        .execute(&mut conn)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Get a record by id
    pub async fn get_record(&self, id: i64) -> Result<Option<Record>, sqlx::Error> {
        let mut conn = self.db.connect().await?;

        let row = sqlx::query(
            r#"
            SELECT id, title, category, notes, priority, status, tags, created_at
            FROM personal_info
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&mut conn)
        .await?;

        match row {
            Some(r) => Ok(Some(Record {
                id: r.get("id"),
                title: r.get("title"),
                category: r.get("category"),
                notes: r.get("notes"),
                priority: r.get("priority"),
                status: r.get("status"),
                tags: r.get("tags"),
                created_at: r.get("created_at"),
            })),
            None => Ok(None),
        }
    }

    /// List all records, newest first.
    ///
    /// `id` breaks ties between records created within the same timestamp
    /// granule, preserving insertion order.
    pub async fn list_records(&self) -> Result<Vec<Record>, sqlx::Error> {
        let mut conn = self.db.connect().await?;

        let rows = sqlx::query(
            r#"
            SELECT id, title, category, notes, priority, status, tags, created_at
            FROM personal_info
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&mut conn)
        .await?;

        let records = rows
            .iter()
            .map(|row| Record {
                id: row.get("id"),
                title: row.get("title"),
                category: row.get("category"),
                notes: row.get("notes"),
                priority: row.get("priority"),
                status: row.get("status"),
                tags: row.get("tags"),
                created_at: row.get("created_at"),
            })
            .collect();

        Ok(records)
    }

    /// Overwrite the mutable fields of a record.
    ///
    /// `id` and `created_at` are deliberately absent from the SET list.
    /// Returns the number of rows affected; zero means the id does not exist.
    pub async fn update_record(
        &self,
        id: i64,
        request: &UpdateRecordRequest,
    ) -> Result<u64, sqlx::Error> {
        let mut conn = self.db.connect().await?;

        let result = sqlx::query(
            r#"
            UPDATE personal_info
            SET title = ?, category = ?, notes = ?, priority = ?, status = ?, tags = ?
            WHERE id = ?
            "#,
        )
        .bind(&request.title)
        .bind(&request.category)
        .bind(&request.notes)
        .bind(&request.priority)
        .bind(&request.status)
        .bind(&request.tags)
        .bind(id)
        .execute(&mut conn)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete a record by id, returning the number of rows affected
    pub async fn delete_record(&self, id: i64) -> Result<u64, sqlx::Error> {
        let mut conn = self.db.connect().await?;

        let result = sqlx::query(
            r#"
            DELETE FROM personal_info WHERE id = ?
            "#,
        )
        .bind(id)
        .execute(&mut conn)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete every record unconditionally.
    ///
    /// The confirmation gate lives in the caller; the repository trusts it.
    pub async fn delete_all_records(&self) -> Result<u64, sqlx::Error> {
        let mut conn = self.db.connect().await?;

        let result = sqlx::query("DELETE FROM personal_info")
            .execute(&mut conn)
            .await?;

        Ok(result.rows_affected())
    }

    /// Count all records
    pub async fn count_records(&self) -> Result<i64, sqlx::Error> {
        let mut conn = self.db.connect().await?;

        let count = sqlx::query_scalar("SELECT COUNT(*) FROM personal_info")
            .fetch_one(&mut conn)
            .await?;

        Ok(count)
    }

    /// Aggregate counts for the overview header
    pub async fn stats(&self) -> Result<RecordStats, sqlx::Error> {
        let mut conn = self.db.connect().await?;

        let row = sqlx::query(
            r#"
            SELECT
                COUNT(*) AS total_records,
                COUNT(DISTINCT category) AS distinct_categories,
                COALESCE(SUM(CASE WHEN status = ? THEN 1 ELSE 0 END), 0) AS in_progress_count,
                COALESCE(SUM(CASE WHEN priority = ? THEN 1 ELSE 0 END), 0) AS high_priority_count
            FROM personal_info
            "#,
        )
        .bind(Status::InProgress.as_str())
        .bind(Priority::High.as_str())
        .fetch_one(&mut conn)
        .await?;

        Ok(RecordStats {
            total_records: row.get("total_records"),
            distinct_categories: row.get("distinct_categories"),
            in_progress_count: row.get("in_progress_count"),
            high_priority_count: row.get("high_priority_count"),
        })
    }
}
