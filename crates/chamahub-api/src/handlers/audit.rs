//! Audit log handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::response::Response;

use chamahub_core::types::{DateWindow, PageResponse};
use chamahub_entity::audit::{AuditAction, AuditLogEntry, AuditLogFilter};

use crate::dto::request::{AuditSearchParams, ExportAuditRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{GatewayUser, PaginationParams};
use crate::handlers::report::file_response;
use crate::state::AppState;

/// GET /audit/search
pub async fn search_audit(
    State(state): State<AppState>,
    _auth: GatewayUser,
    Query(pagination): Query<PaginationParams>,
    Query(params): Query<AuditSearchParams>,
) -> Result<Json<ApiResponse<PageResponse<AuditLogEntry>>>, ApiError> {
    let filter = AuditLogFilter {
        chama_id: None,
        user_id: params.user_id,
        target_id: params.target_id,
        actions: params
            .action
            .as_deref()
            .map(|csv| AuditAction::parse_set(csv.split(',')))
            .unwrap_or_default(),
        window: DateWindow::parse(params.start_date.as_deref(), params.end_date.as_deref())?,
    };

    let page = pagination.into_page_request();
    let result = state.audit_service.find_logs(&filter, &page).await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// POST /audit/export
pub async fn export_audit(
    State(state): State<AppState>,
    _auth: GatewayUser,
    Json(req): Json<ExportAuditRequest>,
) -> Result<Response, ApiError> {
    let filter = AuditLogFilter {
        chama_id: req.chama_id,
        user_id: req.user_id,
        target_id: req.target_id,
        actions: AuditAction::parse_set(req.action.iter().map(String::as_str)),
        window: DateWindow::parse(req.start_date.as_deref(), req.end_date.as_deref())?,
    };

    // Zero matches surfaces as 404 from the service, never an empty CSV.
    let file = state.audit_service.export_csv(&filter).await?;
    Ok(file_response(file))
}
