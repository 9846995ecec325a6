//! Audit query engine.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use chamahub_core::error::AppError;
use chamahub_core::result::AppResult;
use chamahub_core::types::{PageRequest, PageResponse};
use chamahub_database::repositories::AuditLogRepository;
use chamahub_entity::audit::{AuditLogEntry, AuditLogFilter, CreateAuditLogEntry};

use crate::export::csv;
use crate::report::ReportFile;

/// Filtered, paginated retrieval over the immutable audit log, plus the
/// append path the rest of the application writes through.
#[derive(Debug, Clone)]
pub struct AuditService {
    audit_repo: Arc<AuditLogRepository>,
    /// Row cap for a single export file.
    max_export_rows: u64,
}

impl AuditService {
    /// Creates a new audit service.
    pub fn new(audit_repo: Arc<AuditLogRepository>, max_export_rows: u64) -> Self {
        Self {
            audit_repo,
            max_export_rows,
        }
    }

    /// Search audit entries, newest first.
    pub async fn find_logs(
        &self,
        filter: &AuditLogFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<AuditLogEntry>> {
        self.audit_repo.search(filter, page).await
    }

    /// The audit trail of a single chama, newest first.
    pub async fn chama_trail(
        &self,
        chama_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<AuditLogEntry>> {
        self.audit_repo
            .search(&AuditLogFilter::for_chama(chama_id), page)
            .await
    }

    /// Append an audit entry.
    pub async fn record(&self, entry: CreateAuditLogEntry) -> AppResult<AuditLogEntry> {
        self.audit_repo.create(&entry).await
    }

    /// Export the full filtered set as CSV, newest first.
    ///
    /// Zero matching entries is a NotFound error — distinct from an empty
    /// but valid report, which would be a 200 with empty arrays.
    pub async fn export_csv(&self, filter: &AuditLogFilter) -> AppResult<ReportFile> {
        let page = PageRequest::export_window(self.max_export_rows);
        let entries = require_export_rows(self.audit_repo.search(filter, &page).await?.items)?;

        info!(rows = entries.len(), "Exporting audit logs");

        Ok(ReportFile {
            filename: format!("audit-logs-{}.csv", Utc::now().format("%Y%m%d")),
            content_type: "text/csv",
            bytes: csv::audit_logs_csv(&entries)?,
        })
    }
}

/// Refuse to export an empty result set.
///
/// A filter that matches nothing produces NotFound, never a header-only
/// file a caller could mistake for real data.
fn require_export_rows<T>(rows: Vec<T>) -> AppResult<Vec<T>> {
    if rows.is_empty() {
        return Err(AppError::not_found("No audit logs matched the export filter"));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chamahub_core::error::ErrorKind;

    #[test]
    fn test_zero_match_export_is_not_found() {
        let err = require_export_rows(Vec::<AuditLogEntry>::new()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert!(err.message.contains("No audit logs"));
    }

    #[test]
    fn test_matched_rows_pass_through_unchanged() {
        let rows = require_export_rows(vec![1, 2, 3]).unwrap();
        assert_eq!(rows, vec![1, 2, 3]);
    }
}
