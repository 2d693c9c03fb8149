use anyhow::Result;
use chrono::Utc;
use csv::Writer;
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};

use crate::domain::record_service::RecordService;
use shared::{ExportDataResponse, ExportToPathRequest, ExportToPathResponse};

/// Column order of the generated CSV, matching the table schema
const CSV_HEADER: [&str; 8] = [
    "id",
    "title",
    "category",
    "notes",
    "priority",
    "status",
    "tags",
    "created_at",
];

/// Service generating CSV exports of the record table.
#[derive(Clone)]
pub struct ExportService {
    // No internal state needed for now
}

impl ExportService {
    /// Create a new ExportService instance
    pub fn new() -> Self {
        Self {}
    }

    /// Export the full table as CSV data for download.
    ///
    /// The `csv` crate handles quoting, so titles and notes containing
    /// commas, quotes or newlines survive a round trip.
    pub async fn export_csv(&self, record_service: &RecordService) -> Result<ExportDataResponse> {
        info!("Exporting all records as CSV");

        let listed = record_service.list_records().await?;

        let mut writer = Writer::from_writer(vec![]);
        writer.write_record(CSV_HEADER)?;
        for record in &listed.records {
            writer.write_record([
                record.id.to_string(),
                record.title.clone(),
                record.category.clone(),
                record.notes.clone(),
                record.priority.clone(),
                record.status.clone(),
                record.tags.clone(),
                record.created_at.clone(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e))?;
        let csv_content = String::from_utf8(bytes)?;

        // Filename embeds the generation timestamp
        let filename = format!("personal_info_{}.csv", Utc::now().format("%Y%m%d_%H%M%S"));

        info!(
            "Exported {} records ({} bytes) as {}",
            listed.records.len(),
            csv_content.len(),
            filename
        );

        Ok(ExportDataResponse {
            record_count: listed.records.len(),
            csv_content,
            filename,
        })
    }

    /// Export the CSV straight to a directory on disk.
    ///
    /// Falls back to the platform Documents folder, then the home directory,
    /// when the caller did not choose one. Failures to reach the filesystem
    /// are reported in the response so the caller can show them inline.
    pub async fn export_to_path(
        &self,
        request: ExportToPathRequest,
        record_service: &RecordService,
    ) -> Result<ExportToPathResponse> {
        info!("Exporting to path, custom_path: {:?}", request.custom_path);

        let export = self.export_csv(record_service).await?;

        let export_dir = match request.custom_path {
            Some(ref custom_path) if !custom_path.trim().is_empty() => {
                PathBuf::from(sanitize_path(custom_path))
            }
            _ => match dirs::document_dir().or_else(dirs::home_dir) {
                Some(dir) => dir,
                None => {
                    error!("Could not determine a default export directory");
                    return Ok(ExportToPathResponse {
                        success: false,
                        message: "Failed to determine export directory".to_string(),
                        file_path: String::new(),
                        record_count: 0,
                    });
                }
            },
        };

        if let Err(e) = fs::create_dir_all(&export_dir) {
            error!("Failed to create export directory {:?}: {}", export_dir, e);
            return Ok(ExportToPathResponse {
                success: false,
                message: format!("Failed to create export directory: {}", e),
                file_path: export_dir.to_string_lossy().to_string(),
                record_count: 0,
            });
        }

        let file_path = export_dir.join(&export.filename);
        match fs::write(&file_path, &export.csv_content) {
            Ok(()) => {
                let file_path = file_path.to_string_lossy().to_string();
                info!(
                    "Exported {} records to {}",
                    export.record_count, file_path
                );
                Ok(ExportToPathResponse {
                    success: true,
                    message: format!("File exported successfully to: {}", file_path),
                    file_path,
                    record_count: export.record_count,
                })
            }
            Err(e) => {
                error!("Failed to write export file {:?}: {}", file_path, e);
                Ok(ExportToPathResponse {
                    success: false,
                    message: format!("Failed to write export file: {}", e),
                    file_path: file_path.to_string_lossy().to_string(),
                    record_count: 0,
                })
            }
        }
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}

/// Clean up common artifacts in user-typed paths: surrounding quotes,
/// escaped spaces, trailing separators and a leading `~`.
fn sanitize_path(path: &str) -> String {
    let mut cleaned = path.trim().to_string();

    if (cleaned.starts_with('"') && cleaned.ends_with('"') && cleaned.len() >= 2)
        || (cleaned.starts_with('\'') && cleaned.ends_with('\'') && cleaned.len() >= 2)
    {
        cleaned = cleaned[1..cleaned.len() - 1].trim().to_string();
    }

    cleaned = cleaned.replace("\\ ", " ");

    while cleaned.len() > 1 && (cleaned.ends_with('/') || cleaned.ends_with('\\')) {
        cleaned.pop();
    }

    if cleaned.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            if cleaned == "~" {
                cleaned = home.to_string_lossy().to_string();
            } else if cleaned.starts_with("~/") {
                cleaned = home.join(&cleaned[2..]).to_string_lossy().to_string();
            }
        }
    }

    cleaned
}
