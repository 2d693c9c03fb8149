//! Backend for the personal info tracker: a single-table SQLite record store
//! with CRUD operations and CSV export, consumed by a form-driven UI.
//!
//! Construct a [`db::DbConnection`] for the database file (the schema is
//! initialized on open), wrap it in a [`domain::RecordService`], and pair it
//! with a [`domain::ExportService`] for downloads:
//!
//! ```no_run
//! use personal_info_backend::db::DbConnection;
//! use personal_info_backend::domain::{ExportService, RecordService};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let db = DbConnection::init().await?;
//! let records = RecordService::new(db);
//! let exporter = ExportService::new();
//!
//! let listed = records.list_records().await?;
//! let export = exporter.export_csv(&records).await?;
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod domain;
pub mod logging;
pub mod storage;
