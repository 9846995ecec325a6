//! # chamahub-api
//!
//! HTTP API layer for ChamaHub: route definitions, request handlers, DTOs,
//! extractors, and the `AppError → Response` mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
