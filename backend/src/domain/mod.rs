//! Domain layer: validation, timestamps, CRUD orchestration and CSV export.
//! The presentation layer maps its form state onto the request DTOs in the
//! `shared` crate and calls these services directly.

pub mod errors;
pub mod export_service;
pub mod record_service;

pub use errors::RecordError;
pub use export_service::ExportService;
pub use record_service::RecordService;
