use serde::{Deserialize, Serialize};
use std::fmt;

/// A single personal-information record as stored in the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Auto-assigned row id, stable for the lifetime of the record
    pub id: i64,
    /// Short title of the entry (required, never empty)
    pub title: String,
    /// Category label; see `Category` for the suggested set
    pub category: String,
    /// Free-text notes
    pub notes: String,
    /// Priority label; see `Priority` for the suggested set
    pub priority: String,
    /// Status label; see `Status` for the suggested set
    pub status: String,
    /// Comma-separated free-text tags
    pub tags: String,
    /// Creation timestamp (RFC 3339, UTC), assigned once by the store
    pub created_at: String,
}

/// Suggested category set for form renderers.
///
/// The store itself persists categories as plain text and tolerates values
/// outside this set, so rows written by older front-ends still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Honorific,
    Education,
    Competition,
    Certificate,
    Account,
    Other,
}

impl Category {
    /// All categories in form display order
    pub const ALL: [Category; 6] = [
        Category::Honorific,
        Category::Education,
        Category::Competition,
        Category::Certificate,
        Category::Account,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Honorific => "honorific",
            Category::Education => "education",
            Category::Competition => "competition",
            Category::Certificate => "certificate",
            Category::Account => "account",
            Category::Other => "other",
        }
    }

    /// Parse a stored label back into the suggested set, if it belongs to it
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == value)
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Honorific
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Suggested priority set for form renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// All priorities in form display order
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.as_str() == value)
    }
}

impl Default for Priority {
    /// The add-record form preselects medium
    fn default() -> Self {
        Priority::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Suggested status set for form renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    InProgress,
    Completed,
    NotStarted,
}

impl Status {
    /// All statuses in form display order
    pub const ALL: [Status; 3] = [Status::InProgress, Status::Completed, Status::NotStarted];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::InProgress => "in-progress",
            Status::Completed => "completed",
            Status::NotStarted => "not-started",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::InProgress
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request to create a new record.
///
/// `title` is the only required field; everything else may be left empty.
/// The store assigns `id` and `created_at`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateRecordRequest {
    pub title: String,
    pub category: String,
    pub notes: String,
    pub priority: String,
    pub status: String,
    pub tags: String,
}

/// Request to overwrite the mutable fields of an existing record.
/// `id` and `created_at` are never touched by an update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateRecordRequest {
    pub title: String,
    pub category: String,
    pub notes: String,
    pub priority: String,
    pub status: String,
    pub tags: String,
}

/// Response carrying the record affected by a create or update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordResponse {
    pub record: Record,
    pub success_message: String,
}

/// Response for listing records (newest first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordListResponse {
    pub records: Vec<Record>,
}

/// Response after deleting a single record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteRecordResponse {
    pub id: i64,
    pub success_message: String,
}

/// Response after clearing the whole table.
///
/// The caller is expected to gate this behind its own two-step confirmation
/// (checkbox + button); the store performs none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteAllResponse {
    pub deleted_count: u64,
    pub success_message: String,
}

/// Overview statistics for the dashboard header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordStats {
    pub total_records: i64,
    pub distinct_categories: i64,
    pub in_progress_count: i64,
    pub high_priority_count: i64,
}

/// Database details shown in the sidebar info panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseInfo {
    pub record_count: i64,
    pub db_path: String,
}

/// Response containing generated CSV data for download.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDataResponse {
    pub csv_content: String,
    /// Download filename embedding the generation timestamp
    pub filename: String,
    pub record_count: usize,
}

/// Request to export CSV directly to a directory on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportToPathRequest {
    /// Target directory; falls back to Documents, then home, when empty
    pub custom_path: Option<String>,
}

/// Response after exporting to a path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportToPathResponse {
    pub success: bool,
    pub message: String,
    pub file_path: String,
    pub record_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serde_round_trip() {
        let record = Record {
            id: 1,
            title: "Model Student Award".to_string(),
            category: "honorific".to_string(),
            notes: "Awarded in spring term".to_string(),
            priority: "high".to_string(),
            status: "in-progress".to_string(),
            tags: "school,2024".to_string(),
            created_at: "2024-05-01T10:00:00+00:00".to_string(),
        };

        let json = serde_json::to_string(&record).expect("Failed to serialize record");
        let parsed: Record = serde_json::from_str(&json).expect("Failed to deserialize record");

        assert_eq!(parsed, record);
    }

    #[test]
    fn test_enum_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
        for priority in Priority::ALL {
            assert_eq!(Priority::parse(priority.as_str()), Some(priority));
        }
        for status in Status::ALL {
            assert_eq!(Status::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_enum_serde_uses_kebab_case_labels() {
        let json = serde_json::to_string(&Status::InProgress).expect("Failed to serialize status");
        assert_eq!(json, "\"in-progress\"");

        let parsed: Status = serde_json::from_str("\"not-started\"").expect("Failed to parse status");
        assert_eq!(parsed, Status::NotStarted);
    }

    #[test]
    fn test_parse_rejects_values_outside_the_suggested_sets() {
        // Rows written by other front-ends may carry arbitrary labels; parse
        // reports them as outside the set rather than panicking.
        assert_eq!(Category::parse("荣誉"), None);
        assert_eq!(Priority::parse(""), None);
        assert_eq!(Status::parse("done"), None);
    }

    #[test]
    fn test_form_defaults() {
        assert_eq!(Category::default(), Category::Honorific);
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!(Status::default(), Status::InProgress);
    }
}
