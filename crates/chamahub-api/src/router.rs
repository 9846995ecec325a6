//! Route definitions for the ChamaHub HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state);

    Router::new()
        .merge(report_routes())
        .merge(audit_routes())
        .merge(health_routes())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Chama-scoped report endpoints.
fn report_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/reports/{chama_id}/financial-summary",
            get(handlers::report::financial_summary),
        )
        .route(
            "/reports/{chama_id}/contributions",
            get(handlers::report::contributions_report),
        )
        .route(
            "/reports/{chama_id}/loans",
            get(handlers::report::loan_portfolio),
        )
        .route(
            "/reports/{chama_id}/cashflow",
            get(handlers::report::cashflow_report),
        )
        .route(
            "/reports/{chama_id}/members",
            get(handlers::report::member_performance),
        )
        .route(
            "/reports/{chama_id}/audit",
            get(handlers::report::chama_audit_trail),
        )
        .route(
            "/reports/{chama_id}/export",
            post(handlers::report::export_report),
        )
}

/// Cross-chama audit endpoints.
fn audit_routes() -> Router<AppState> {
    Router::new()
        .route("/audit/search", get(handlers::audit::search_audit))
        .route("/audit/export", post(handlers::audit::export_audit))
}

/// Health check endpoints (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::HeaderValue;
    use tower_http::cors::Any;

    let allowed = &state.config.server.allowed_origins;

    if allowed.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any).allow_methods(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed.iter().filter_map(|o| o.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins).allow_methods(Any)
    }
}
