//! Loan repository: disbursement/repayment aggregates and the status
//! breakdown behind the portfolio report.

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use chamahub_core::error::{AppError, ErrorKind};
use chamahub_core::result::AppResult;
use chamahub_core::types::DateWindow;
use chamahub_entity::loan::LoanStatusBreakdown;

/// Repository for loans and loan payments.
#[derive(Debug, Clone)]
pub struct LoanRepository {
    pool: PgPool,
}

impl LoanRepository {
    /// Create a new loan repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Sum disbursed principal: every loan whose status is past PENDING.
    pub async fn total_disbursed(&self, chama_id: Uuid) -> AppResult<Decimal> {
        sqlx::query_scalar::<_, Decimal>(
            "SELECT COALESCE(SUM(l.amount), 0) \
             FROM loans l \
             JOIN memberships m ON m.id = l.membership_id \
             WHERE m.chama_id = $1 AND l.status <> 'PENDING'",
        )
        .bind(chama_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to sum disbursed loans", e)
        })
    }

    /// Sum principal of currently ACTIVE loans.
    pub async fn outstanding_principal(&self, chama_id: Uuid) -> AppResult<Decimal> {
        sqlx::query_scalar::<_, Decimal>(
            "SELECT COALESCE(SUM(l.amount), 0) \
             FROM loans l \
             JOIN memberships m ON m.id = l.membership_id \
             WHERE m.chama_id = $1 AND l.status = 'ACTIVE'",
        )
        .bind(chama_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to sum outstanding principal", e)
        })
    }

    /// Sum principal disbursed inside a date window (by `disbursed_at`).
    pub async fn disbursed_in_window(
        &self,
        chama_id: Uuid,
        window: &DateWindow,
    ) -> AppResult<Decimal> {
        let mut sql = String::from(
            "SELECT COALESCE(SUM(l.amount), 0) \
             FROM loans l \
             JOIN memberships m ON m.id = l.membership_id \
             WHERE m.chama_id = $1 AND l.status <> 'PENDING'",
        );
        let mut param_idx = 2u32;
        if window.start_bound().is_some() {
            sql.push_str(&format!(" AND l.disbursed_at >= ${param_idx}"));
            param_idx += 1;
        }
        if window.end_bound().is_some() {
            sql.push_str(&format!(" AND l.disbursed_at <= ${param_idx}"));
        }

        let mut query = sqlx::query_scalar::<_, Decimal>(&sql).bind(chama_id);
        if let Some(start) = window.start_bound() {
            query = query.bind(start);
        }
        if let Some(end) = window.end_bound() {
            query = query.bind(end);
        }

        query.fetch_one(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to sum windowed disbursements", e)
        })
    }

    /// Per-status count and principal sum, in status declaration order.
    pub async fn status_breakdown(&self, chama_id: Uuid) -> AppResult<Vec<LoanStatusBreakdown>> {
        sqlx::query_as::<_, LoanStatusBreakdown>(
            "SELECT l.status, COUNT(*) AS count, COALESCE(SUM(l.amount), 0) AS total_amount \
             FROM loans l \
             JOIN memberships m ON m.id = l.membership_id \
             WHERE m.chama_id = $1 \
             GROUP BY l.status \
             ORDER BY l.status",
        )
        .bind(chama_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to group loans by status", e)
        })
    }

    /// Sum all loan repayments for a chama, regardless of loan status.
    pub async fn repayment_total(&self, chama_id: Uuid) -> AppResult<Decimal> {
        sqlx::query_scalar::<_, Decimal>(
            "SELECT COALESCE(SUM(p.amount), 0) \
             FROM loan_payments p \
             JOIN loans l ON l.id = p.loan_id \
             JOIN memberships m ON m.id = l.membership_id \
             WHERE m.chama_id = $1",
        )
        .bind(chama_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to sum loan repayments", e)
        })
    }

    /// Sum loan repayments inside a date window (by `paid_at`).
    pub async fn repayments_in_window(
        &self,
        chama_id: Uuid,
        window: &DateWindow,
    ) -> AppResult<Decimal> {
        let mut sql = String::from(
            "SELECT COALESCE(SUM(p.amount), 0) \
             FROM loan_payments p \
             JOIN loans l ON l.id = p.loan_id \
             JOIN memberships m ON m.id = l.membership_id \
             WHERE m.chama_id = $1",
        );
        let mut param_idx = 2u32;
        if window.start_bound().is_some() {
            sql.push_str(&format!(" AND p.paid_at >= ${param_idx}"));
            param_idx += 1;
        }
        if window.end_bound().is_some() {
            sql.push_str(&format!(" AND p.paid_at <= ${param_idx}"));
        }

        let mut query = sqlx::query_scalar::<_, Decimal>(&sql).bind(chama_id);
        if let Some(start) = window.start_bound() {
            query = query.bind(start);
        }
        if let Some(end) = window.end_bound() {
            query = query.bind(end);
        }

        query.fetch_one(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to sum windowed repayments", e)
        })
    }
}
