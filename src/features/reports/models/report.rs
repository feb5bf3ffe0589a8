use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Category assigned when a report is submitted without one
pub const DEFAULT_CATEGORY: &str = "General";

/// Report status as shown to citizens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ReportStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Pending => write!(f, "Pending"),
            ReportStatus::InProgress => write!(f, "In Progress"),
            ReportStatus::Resolved => write!(f, "Resolved"),
        }
    }
}

/// Stored report record. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub category: String,
    pub photo_url: String,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
}

/// Validated data for creating a new report, optional fields already defaulted.
///
/// The store assigns `id`, `status` and `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReport {
    pub title: String,
    pub summary: String,
    pub location: String,
    pub photo_url: String,
    pub latitude: f64,
    pub longitude: f64,
    pub category: String,
}
