//! Contribution repository: PAID-scoped aggregates and report listings.

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use chamahub_core::error::{AppError, ErrorKind};
use chamahub_core::result::AppResult;
use chamahub_core::types::{DateWindow, PageRequest, PageResponse};
use chamahub_entity::contribution::ContributionReportRow;

/// Summed PAID contribution amounts for one chama.
#[derive(Debug, Clone, Copy)]
pub struct ContributionTotals {
    /// Summed contribution amount.
    pub amount: Decimal,
    /// Summed penalties.
    pub penalties: Decimal,
}

/// Repository for contribution records.
#[derive(Debug, Clone)]
pub struct ContributionRepository {
    pool: PgPool,
}

impl ContributionRepository {
    /// Create a new contribution repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Sum amount and penalties over PAID contributions for a chama.
    ///
    /// An unknown chama yields zero totals, not an error.
    pub async fn paid_totals(&self, chama_id: Uuid) -> AppResult<ContributionTotals> {
        let (amount, penalties): (Decimal, Decimal) = sqlx::query_as(
            "SELECT COALESCE(SUM(c.amount), 0), COALESCE(SUM(c.penalty_applied), 0) \
             FROM contributions c \
             JOIN memberships m ON m.id = c.membership_id \
             WHERE m.chama_id = $1 AND c.status = 'PAID'",
        )
        .bind(chama_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to sum contributions", e)
        })?;

        Ok(ContributionTotals { amount, penalties })
    }

    /// Sum PAID contribution amounts inside a date window (by `paid_at`).
    pub async fn paid_total_in_window(
        &self,
        chama_id: Uuid,
        window: &DateWindow,
    ) -> AppResult<Decimal> {
        let mut sql = String::from(
            "SELECT COALESCE(SUM(c.amount), 0) \
             FROM contributions c \
             JOIN memberships m ON m.id = c.membership_id \
             WHERE m.chama_id = $1 AND c.status = 'PAID'",
        );
        let mut param_idx = 2u32;
        if window.start_bound().is_some() {
            sql.push_str(&format!(" AND c.paid_at >= ${param_idx}"));
            param_idx += 1;
        }
        if window.end_bound().is_some() {
            sql.push_str(&format!(" AND c.paid_at <= ${param_idx}"));
        }

        let mut query = sqlx::query_scalar::<_, Decimal>(&sql).bind(chama_id);
        if let Some(start) = window.start_bound() {
            query = query.bind(start);
        }
        if let Some(end) = window.end_bound() {
            query = query.bind(end);
        }

        query.fetch_one(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to sum windowed contributions", e)
        })
    }

    /// Paginated PAID contribution rows with member names, newest first.
    ///
    /// Backs the contributions report endpoint and both export formats.
    pub async fn list_paid(
        &self,
        chama_id: Uuid,
        window: &DateWindow,
        page: &PageRequest,
    ) -> AppResult<PageResponse<ContributionReportRow>> {
        let mut where_clause = String::from(
            "FROM contributions c \
             JOIN memberships m ON m.id = c.membership_id \
             JOIN users u ON u.id = m.user_id \
             WHERE m.chama_id = $1 AND c.status = 'PAID'",
        );
        let mut param_idx = 2u32;
        if window.start_bound().is_some() {
            where_clause.push_str(&format!(" AND c.paid_at >= ${param_idx}"));
            param_idx += 1;
        }
        if window.end_bound().is_some() {
            where_clause.push_str(&format!(" AND c.paid_at <= ${param_idx}"));
            param_idx += 1;
        }

        let count_sql = format!("SELECT COUNT(*) {where_clause}");
        let select_sql = format!(
            "SELECT u.first_name || ' ' || u.last_name AS member_name, \
                    c.amount, c.penalty_applied, c.month, c.year, \
                    c.payment_method, c.paid_at \
             {where_clause} ORDER BY c.paid_at DESC LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql).bind(chama_id);
        let mut select_query =
            sqlx::query_as::<_, ContributionReportRow>(&select_sql).bind(chama_id);

        if let Some(start) = window.start_bound() {
            count_query = count_query.bind(start);
            select_query = select_query.bind(start);
        }
        if let Some(end) = window.end_bound() {
            count_query = count_query.bind(end);
            select_query = select_query.bind(end);
        }

        let total = count_query.fetch_one(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count contributions", e)
        })?;

        let rows = select_query
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list contributions", e)
            })?;

        Ok(PageResponse::new(rows, page, total as u64))
    }
}
