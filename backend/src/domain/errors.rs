/// Error taxonomy for record store operations.
///
/// Validation and not-found failures are user-visible and leave the table
/// untouched; storage failures are engine-level and simply propagated — the
/// store stays usable for subsequent operations.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Title is required and cannot be empty")]
    EmptyTitle,
    #[error("Record with id {0} does not exist")]
    NotFound(i64),
    #[error("Storage failure: {0}")]
    Storage(#[from] sqlx::Error),
}
