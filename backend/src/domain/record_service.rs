use chrono::{SecondsFormat, Utc};
use tracing::{info, warn};

use crate::db::DbConnection;
use crate::domain::errors::RecordError;
use crate::storage::RecordRepository;
use shared::{
    CreateRecordRequest, DatabaseInfo, DeleteAllResponse, DeleteRecordResponse, Record,
    RecordListResponse, RecordResponse, RecordStats, UpdateRecordRequest,
};

/// Service for managing personal-information records.
///
/// Owns validation (title must be non-empty) and timestamp assignment;
/// everything else is delegated to the repository. Category, priority and
/// status are persisted as plain text on purpose — rows written by other
/// front-ends may carry labels outside the suggested sets and must still
/// load and export cleanly.
#[derive(Clone)]
pub struct RecordService {
    db: DbConnection,
    repository: RecordRepository,
}

impl RecordService {
    /// Create a new RecordService over an already-initialized database
    pub fn new(db: DbConnection) -> Self {
        let repository = RecordRepository::new(db.clone());
        Self { db, repository }
    }

    /// Create a new record and return it with its assigned id.
    pub async fn create_record(
        &self,
        request: CreateRecordRequest,
    ) -> Result<RecordResponse, RecordError> {
        info!("Creating record: title={}", request.title);

        let title = request.title.trim().to_string();
        if title.is_empty() {
            warn!("Rejected record creation: empty title");
            return Err(RecordError::EmptyTitle);
        }

        // The store assigns the creation timestamp exactly once; fixed-width
        // fractional seconds keep the stored strings lexicographically sortable.
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

        let request = CreateRecordRequest { title, ..request };
        let id = self.repository.insert_record(&request, &created_at).await?;

        let record = Record {
            id,
            title: request.title,
            category: request.category,
            notes: request.notes,
            priority: request.priority,
            status: request.status,
            tags: request.tags,
            created_at,
        };

        info!("Created record {} ({})", record.id, record.title);

        Ok(RecordResponse {
            record,
            success_message: "Record created successfully".to_string(),
        })
    }

    /// List all records, newest first
    pub async fn list_records(&self) -> Result<RecordListResponse, RecordError> {
        let records = self.repository.list_records().await?;

        info!("Listed {} records", records.len());

        Ok(RecordListResponse { records })
    }

    /// Get a single record by id, e.g. to pre-populate an edit form
    pub async fn get_record(&self, id: i64) -> Result<Option<Record>, RecordError> {
        let record = self.repository.get_record(id).await?;

        if record.is_none() {
            warn!("Record not found: {}", id);
        }

        Ok(record)
    }

    /// Overwrite the mutable fields of an existing record.
    ///
    /// `id` and `created_at` are never changed. Absence is detected by the
    /// update touching zero rows.
    pub async fn update_record(
        &self,
        id: i64,
        request: UpdateRecordRequest,
    ) -> Result<RecordResponse, RecordError> {
        info!("Updating record {}: title={}", id, request.title);

        let title = request.title.trim().to_string();
        if title.is_empty() {
            warn!("Rejected record update: empty title");
            return Err(RecordError::EmptyTitle);
        }

        let request = UpdateRecordRequest { title, ..request };
        let rows_affected = self.repository.update_record(id, &request).await?;
        if rows_affected == 0 {
            warn!("Update failed, record not found: {}", id);
            return Err(RecordError::NotFound(id));
        }

        // Re-read so the caller gets the record as stored, created_at included
        let record = self
            .repository
            .get_record(id)
            .await?
            .ok_or(RecordError::NotFound(id))?;

        info!("Updated record {}", id);

        Ok(RecordResponse {
            record,
            success_message: "Record updated successfully".to_string(),
        })
    }

    /// Delete a single record by id.
    pub async fn delete_record(&self, id: i64) -> Result<DeleteRecordResponse, RecordError> {
        info!("Deleting record {}", id);

        // Check the record exists before deleting so the caller gets a
        // precise not-found message
        if self.repository.get_record(id).await?.is_none() {
            warn!("Delete failed, record not found: {}", id);
            return Err(RecordError::NotFound(id));
        }

        self.repository.delete_record(id).await?;

        info!("Deleted record {}", id);

        Ok(DeleteRecordResponse {
            id,
            success_message: format!("Record {} deleted", id),
        })
    }

    /// Delete every record unconditionally.
    ///
    /// The two-step confirmation (checkbox + button) belongs to the caller;
    /// by the time this runs the decision has been made.
    pub async fn delete_all_records(&self) -> Result<DeleteAllResponse, RecordError> {
        let deleted_count = self.repository.delete_all_records().await?;

        info!("Deleted all records ({} rows)", deleted_count);

        Ok(DeleteAllResponse {
            deleted_count,
            success_message: format!("All {} records deleted", deleted_count),
        })
    }

    /// Aggregate counts for the overview header
    pub async fn stats(&self) -> Result<RecordStats, RecordError> {
        let stats = self.repository.stats().await?;
        Ok(stats)
    }

    /// Record count and file location for the sidebar info panel
    pub async fn database_info(&self) -> Result<DatabaseInfo, RecordError> {
        let record_count = self.repository.count_records().await?;

        Ok(DatabaseInfo {
            record_count,
            db_path: self.db.path().display().to_string(),
        })
    }
}
