//! Membership repository: per-member rollups for the performance report.

use sqlx::PgPool;
use uuid::Uuid;

use chamahub_core::error::{AppError, ErrorKind};
use chamahub_core::result::AppResult;
use chamahub_entity::membership::MemberPerformanceRow;

/// Repository for chama memberships.
#[derive(Debug, Clone)]
pub struct MembershipRepository {
    pool: PgPool,
}

impl MembershipRepository {
    /// Create a new membership repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Per-active-membership rollup: PAID contribution count/total, loan
    /// count/principal, and the count of ACTIVE loans.
    ///
    /// Subselects keep the three rollups independent; joining contributions
    /// and loans in one pass would multiply rows and corrupt the sums.
    pub async fn member_performance(
        &self,
        chama_id: Uuid,
    ) -> AppResult<Vec<MemberPerformanceRow>> {
        sqlx::query_as::<_, MemberPerformanceRow>(
            "SELECT m.id AS membership_id, \
                    u.first_name || ' ' || u.last_name AS member_name, \
                    m.role, \
                    (SELECT COUNT(*) FROM contributions c \
                      WHERE c.membership_id = m.id AND c.status = 'PAID') AS contribution_count, \
                    (SELECT COALESCE(SUM(c.amount), 0) FROM contributions c \
                      WHERE c.membership_id = m.id AND c.status = 'PAID') AS contribution_total, \
                    (SELECT COUNT(*) FROM loans l \
                      WHERE l.membership_id = m.id) AS loan_count, \
                    (SELECT COALESCE(SUM(l.amount), 0) FROM loans l \
                      WHERE l.membership_id = m.id) AS loan_principal_total, \
                    (SELECT COUNT(*) FROM loans l \
                      WHERE l.membership_id = m.id AND l.status = 'ACTIVE') AS active_loan_count \
             FROM memberships m \
             JOIN users u ON u.id = m.user_id \
             WHERE m.chama_id = $1 AND m.is_active \
             ORDER BY member_name",
        )
        .bind(chama_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to roll up member performance", e)
        })
    }
}
