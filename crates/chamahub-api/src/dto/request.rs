//! Request DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Query parameters carrying an optional date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRangeParams {
    /// Inclusive start date (`YYYY-MM-DD`).
    pub start_date: Option<String>,
    /// Inclusive end date (`YYYY-MM-DD`).
    pub end_date: Option<String>,
}

/// Query parameters for audit search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditSearchParams {
    /// Comma-separated action tokens; unknown tokens are ignored.
    pub action: Option<String>,
    /// Restrict to one actor.
    pub user_id: Option<Uuid>,
    /// Restrict to one target resource.
    pub target_id: Option<Uuid>,
    /// Inclusive start date (`YYYY-MM-DD`).
    pub start_date: Option<String>,
    /// Inclusive end date (`YYYY-MM-DD`).
    pub end_date: Option<String>,
}

/// Body of `POST /reports/{chama_id}/export`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportReportRequest {
    /// Which report to export (currently `"contributions"`).
    pub report_type: String,
    /// Output format: `"csv"` (default) or `"pdf"`.
    #[serde(default = "default_format")]
    pub format: String,
    /// Inclusive start date (`YYYY-MM-DD`).
    pub start_date: Option<String>,
    /// Inclusive end date (`YYYY-MM-DD`).
    pub end_date: Option<String>,
}

fn default_format() -> String {
    "csv".to_string()
}

/// Body of `POST /audit/export`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExportAuditRequest {
    /// Action tokens to include; unknown tokens are ignored.
    #[serde(default)]
    pub action: Vec<String>,
    /// Restrict to one actor.
    pub user_id: Option<Uuid>,
    /// Restrict to one target resource.
    pub target_id: Option<Uuid>,
    /// Restrict to one chama.
    pub chama_id: Option<Uuid>,
    /// Inclusive start date (`YYYY-MM-DD`).
    pub start_date: Option<String>,
    /// Inclusive end date (`YYYY-MM-DD`).
    pub end_date: Option<String>,
}
