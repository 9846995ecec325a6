//! Maps domain errors to HTTP responses.
//!
//! `AppError` belongs to `chamahub-core` and `IntoResponse` to axum, so the
//! mapping lives on a local newtype. Handlers return `ApiError` and lean on
//! `From<AppError>` so `?` converts at the boundary.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use chamahub_core::error::{AppError, ErrorKind};

/// HTTP-facing wrapper over the domain error.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, error_code, message) = match &err.kind {
            ErrorKind::Validation => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.message.clone())
            }
            ErrorKind::Unsupported => (
                StatusCode::BAD_REQUEST,
                "UNSUPPORTED_REPORT_TYPE",
                err.message.clone(),
            ),
            ErrorKind::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", err.message.clone())
            }
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND", err.message.clone()),
            // Everything else is internal: log the real error, return a
            // generic message.
            _ => {
                tracing::error!(kind = %err.kind, error = %err.message, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let resp = ApiError::from(AppError::validation("bad date")).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unsupported_maps_to_400() {
        let resp =
            ApiError::from(AppError::unsupported("Unsupported report type: 'weekly'"))
                .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let resp = ApiError::from(AppError::not_found("no rows")).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_maps_to_generic_500() {
        let resp = ApiError::from(AppError::database("connection refused")).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
