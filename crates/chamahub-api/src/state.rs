//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use chamahub_core::config::AppConfig;
use chamahub_database::repositories::{
    AuditLogRepository, ContributionRepository, LoanRepository, MembershipRepository,
};
use chamahub_service::audit::AuditService;
use chamahub_service::report::ReportService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Financial report service.
    pub report_service: Arc<ReportService>,
    /// Audit query/export service.
    pub audit_service: Arc<AuditService>,
}

impl AppState {
    /// Wire repositories and services over the given pool.
    pub fn new(config: Arc<AppConfig>, db_pool: PgPool) -> Self {
        let contribution_repo = Arc::new(ContributionRepository::new(db_pool.clone()));
        let loan_repo = Arc::new(LoanRepository::new(db_pool.clone()));
        let membership_repo = Arc::new(MembershipRepository::new(db_pool.clone()));
        let audit_repo = Arc::new(AuditLogRepository::new(db_pool.clone()));

        let max_export_rows = config.report.max_export_rows;

        let report_service = Arc::new(ReportService::new(
            contribution_repo,
            loan_repo,
            membership_repo,
            max_export_rows,
        ));
        let audit_service = Arc::new(AuditService::new(audit_repo, max_export_rows));

        Self {
            config,
            db_pool,
            report_service,
            audit_service,
        }
    }
}
