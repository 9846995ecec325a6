//! Financial report handlers.
//!
//! Thin controllers: parse parameters, call the report service, shape the
//! JSON envelope. Parameter validation failures surface as 400 before any
//! query runs.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use chamahub_core::types::{DateWindow, PageResponse};
use chamahub_entity::audit::{AuditAction, AuditLogEntry, CreateAuditLogEntry};
use chamahub_entity::contribution::ContributionReportRow;
use chamahub_entity::membership::MemberPerformanceRow;
use chamahub_service::report::{CashflowReport, FinancialSummary, LoanPortfolioReport};

use crate::dto::request::{DateRangeParams, ExportReportRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{GatewayUser, PaginationParams};
use crate::state::AppState;

/// GET /reports/{chama_id}/financial-summary
pub async fn financial_summary(
    State(state): State<AppState>,
    _auth: GatewayUser,
    Path(chama_id): Path<Uuid>,
) -> Result<Json<ApiResponse<FinancialSummary>>, ApiError> {
    let summary = state.report_service.financial_summary(chama_id).await?;
    Ok(Json(ApiResponse::ok(summary)))
}

/// GET /reports/{chama_id}/contributions
pub async fn contributions_report(
    State(state): State<AppState>,
    _auth: GatewayUser,
    Path(chama_id): Path<Uuid>,
    Query(pagination): Query<PaginationParams>,
    Query(range): Query<DateRangeParams>,
) -> Result<Json<ApiResponse<PageResponse<ContributionReportRow>>>, ApiError> {
    let window = DateWindow::parse(range.start_date.as_deref(), range.end_date.as_deref())?;
    let page = pagination.into_page_request();
    let report = state
        .report_service
        .contributions_report(chama_id, &window, &page)
        .await?;
    Ok(Json(ApiResponse::ok(report)))
}

/// GET /reports/{chama_id}/loans
pub async fn loan_portfolio(
    State(state): State<AppState>,
    _auth: GatewayUser,
    Path(chama_id): Path<Uuid>,
) -> Result<Json<ApiResponse<LoanPortfolioReport>>, ApiError> {
    let report = state.report_service.loan_portfolio_report(chama_id).await?;
    Ok(Json(ApiResponse::ok(report)))
}

/// GET /reports/{chama_id}/cashflow
pub async fn cashflow_report(
    State(state): State<AppState>,
    _auth: GatewayUser,
    Path(chama_id): Path<Uuid>,
    Query(range): Query<DateRangeParams>,
) -> Result<Json<ApiResponse<CashflowReport>>, ApiError> {
    let window = DateWindow::parse(range.start_date.as_deref(), range.end_date.as_deref())?;
    let report = state
        .report_service
        .cashflow_report(chama_id, &window)
        .await?;
    Ok(Json(ApiResponse::ok(report)))
}

/// GET /reports/{chama_id}/members
pub async fn member_performance(
    State(state): State<AppState>,
    _auth: GatewayUser,
    Path(chama_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<MemberPerformanceRow>>>, ApiError> {
    let report = state
        .report_service
        .member_performance_report(chama_id)
        .await?;
    Ok(Json(ApiResponse::ok(report)))
}

/// GET /reports/{chama_id}/audit
pub async fn chama_audit_trail(
    State(state): State<AppState>,
    _auth: GatewayUser,
    Path(chama_id): Path<Uuid>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<AuditLogEntry>>>, ApiError> {
    let page = pagination.into_page_request();
    let trail = state.audit_service.chama_trail(chama_id, &page).await?;
    Ok(Json(ApiResponse::ok(trail)))
}

/// POST /reports/{chama_id}/export
pub async fn export_report(
    State(state): State<AppState>,
    auth: GatewayUser,
    Path(chama_id): Path<Uuid>,
    Json(req): Json<ExportReportRequest>,
) -> Result<Response, ApiError> {
    let window = DateWindow::parse(req.start_date.as_deref(), req.end_date.as_deref())?;
    let file = state
        .report_service
        .generate_report_file(chama_id, &req.report_type, &req.format, &window)
        .await?;

    // The export itself is an auditable action; a failed append must not
    // lose an already-generated file.
    let entry = CreateAuditLogEntry {
        action: AuditAction::ReportExported,
        user_id: auth.user_id,
        target_id: None,
        chama_id: Some(chama_id),
        payload: Some(serde_json::json!({
            "report_type": req.report_type,
            "format": req.format,
        })),
    };
    if let Err(e) = state.audit_service.record(entry).await {
        tracing::warn!(error = %e, "Failed to record export audit entry");
    }

    Ok(file_response(file))
}

/// Wrap an export file as a binary attachment response.
pub(crate) fn file_response(file: chamahub_service::report::ReportFile) -> Response {
    (
        [
            (header::CONTENT_TYPE, file.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.filename),
            ),
        ],
        file.bytes,
    )
        .into_response()
}
