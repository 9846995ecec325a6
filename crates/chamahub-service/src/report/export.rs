//! Report file export entry point.
//!
//! Report type and format are validated up front: an unsupported value is a
//! distinguished error raised before any query executes.

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use chamahub_core::error::AppError;
use chamahub_core::result::AppResult;
use chamahub_core::types::{DateWindow, PageRequest};

use crate::export::{csv, pdf};

use super::service::ReportService;

/// Exportable report types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportType {
    /// PAID contribution rows.
    Contributions,
}

impl ReportType {
    /// Slug used in request bodies and export filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contributions => "contributions",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "contributions" => Ok(Self::Contributions),
            _ => Err(AppError::unsupported(format!(
                "Unsupported report type: '{s}'"
            ))),
        }
    }
}

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Pdf,
}

impl ExportFormat {
    /// File extension for the format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Pdf => "pdf",
        }
    }

    /// MIME type for the format.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Pdf => "application/pdf",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "pdf" => Ok(Self::Pdf),
            _ => Err(AppError::unsupported(format!(
                "Unsupported export format: '{s}'"
            ))),
        }
    }
}

/// A rendered export file ready to be attached to a response.
#[derive(Debug, Clone)]
pub struct ReportFile {
    /// Suggested download filename.
    pub filename: String,
    /// MIME type of the bytes.
    pub content_type: &'static str,
    /// File content.
    pub bytes: Vec<u8>,
}

impl ReportService {
    /// Generate a downloadable report file.
    ///
    /// `report_type` and `format` are parsed before any repository call, so
    /// unsupported values fail fast without touching the database. The query
    /// materializes at most `report.max_export_rows` rows in one page; the
    /// formatters themselves accept any row count, including zero.
    pub async fn generate_report_file(
        &self,
        chama_id: Uuid,
        report_type: &str,
        format: &str,
        window: &DateWindow,
    ) -> AppResult<ReportFile> {
        let report_type: ReportType = report_type.parse()?;
        let format: ExportFormat = format.parse()?;

        match report_type {
            ReportType::Contributions => {
                let page = PageRequest::export_window(self.max_export_rows());
                let rows = self
                    .contribution_repo()
                    .list_paid(chama_id, window, &page)
                    .await?
                    .items;

                info!(
                    %chama_id,
                    report_type = %report_type,
                    format = format.extension(),
                    rows = rows.len(),
                    "Generating report file"
                );

                let bytes = match format {
                    ExportFormat::Csv => csv::contributions_csv(&rows)?,
                    ExportFormat::Pdf => {
                        let title = format!("Contributions Report ({})", window.label());
                        pdf::contributions_pdf(&title, &rows)?
                    }
                };

                Ok(ReportFile {
                    filename: format!(
                        "{}-{}.{}",
                        report_type.as_str(),
                        Utc::now().format("%Y%m%d"),
                        format.extension()
                    ),
                    content_type: format.content_type(),
                    bytes,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chamahub_core::error::ErrorKind;
    use chamahub_database::repositories::{
        ContributionRepository, LoanRepository, MembershipRepository,
    };
    use std::sync::Arc;

    fn service_over_lazy_pool() -> ReportService {
        // connect_lazy performs no I/O; the pool is never touched because
        // validation rejects the request first.
        let pool = sqlx::PgPool::connect_lazy("postgres://localhost:5432/unused")
            .expect("lazy pool");
        ReportService::new(
            Arc::new(ContributionRepository::new(pool.clone())),
            Arc::new(LoanRepository::new(pool.clone())),
            Arc::new(MembershipRepository::new(pool)),
            10_000,
        )
    }

    #[tokio::test]
    async fn test_unsupported_report_type_rejected_before_query() {
        let service = service_over_lazy_pool();
        let err = service
            .generate_report_file(Uuid::new_v4(), "unsupported", "csv", &DateWindow::unbounded())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unsupported);
        assert!(err.message.contains("Unsupported report type"));
    }

    #[tokio::test]
    async fn test_unsupported_format_rejected_before_query() {
        let service = service_over_lazy_pool();
        let err = service
            .generate_report_file(Uuid::new_v4(), "contributions", "xlsx", &DateWindow::unbounded())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unsupported);
    }

    #[test]
    fn test_report_type_parsing() {
        assert_eq!(
            "Contributions".parse::<ReportType>().unwrap(),
            ReportType::Contributions
        );
        assert!("weekly".parse::<ReportType>().is_err());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("pdf".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
        assert!("xlsx".parse::<ExportFormat>().is_err());
    }
}
