//! Audit log repository implementation.

use sqlx::PgPool;

use chamahub_core::error::{AppError, ErrorKind};
use chamahub_core::result::AppResult;
use chamahub_core::types::{PageRequest, PageResponse};
use chamahub_entity::audit::{AuditLogEntry, AuditLogFilter, CreateAuditLogEntry};

/// Repository for the append-only audit log.
#[derive(Debug, Clone)]
pub struct AuditLogRepository {
    pool: PgPool,
}

impl AuditLogRepository {
    /// Create a new audit log repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Search the audit log with a conjunctive filter.
    ///
    /// Results are ordered strictly newest-first by `created_at`; export
    /// callers rely on that ordering for reproducible files.
    pub async fn search(
        &self,
        filter: &AuditLogFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<AuditLogEntry>> {
        let mut conditions = Vec::new();
        let mut param_idx = 1u32;

        if filter.chama_id.is_some() {
            conditions.push(format!("chama_id = ${param_idx}"));
            param_idx += 1;
        }
        if filter.user_id.is_some() {
            conditions.push(format!("user_id = ${param_idx}"));
            param_idx += 1;
        }
        if filter.target_id.is_some() {
            conditions.push(format!("target_id = ${param_idx}"));
            param_idx += 1;
        }
        if !filter.actions.is_empty() {
            conditions.push(format!("action = ANY(${param_idx})"));
            param_idx += 1;
        }
        if filter.window.start_bound().is_some() {
            conditions.push(format!("created_at >= ${param_idx}"));
            param_idx += 1;
        }
        if filter.window.end_bound().is_some() {
            conditions.push(format!("created_at <= ${param_idx}"));
            param_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) FROM audit_logs {where_clause}");
        let select_sql = format!(
            "SELECT * FROM audit_logs {where_clause} \
             ORDER BY created_at DESC LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let action_tokens: Vec<String> = filter
            .actions
            .iter()
            .map(|a| a.as_str().to_string())
            .collect();

        // Build dynamic queries
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        let mut select_query = sqlx::query_as::<_, AuditLogEntry>(&select_sql);

        if let Some(cid) = filter.chama_id {
            count_query = count_query.bind(cid);
            select_query = select_query.bind(cid);
        }
        if let Some(uid) = filter.user_id {
            count_query = count_query.bind(uid);
            select_query = select_query.bind(uid);
        }
        if let Some(tid) = filter.target_id {
            count_query = count_query.bind(tid);
            select_query = select_query.bind(tid);
        }
        if !action_tokens.is_empty() {
            count_query = count_query.bind(action_tokens.clone());
            select_query = select_query.bind(action_tokens.clone());
        }
        if let Some(start) = filter.window.start_bound() {
            count_query = count_query.bind(start);
            select_query = select_query.bind(start);
        }
        if let Some(end) = filter.window.end_bound() {
            count_query = count_query.bind(end);
            select_query = select_query.bind(end);
        }

        let total = count_query.fetch_one(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count audit entries", e)
        })?;

        let entries = select_query
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to search audit log", e)
            })?;

        Ok(PageResponse::new(entries, page, total as u64))
    }

    /// Append an audit log entry. Entries are never updated afterwards.
    pub async fn create(&self, data: &CreateAuditLogEntry) -> AppResult<AuditLogEntry> {
        sqlx::query_as::<_, AuditLogEntry>(
            "INSERT INTO audit_logs (action, user_id, target_id, chama_id, payload) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(data.action.as_str())
        .bind(data.user_id)
        .bind(data.target_id)
        .bind(data.chama_id)
        .bind(&data.payload)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create audit entry", e))
    }
}
