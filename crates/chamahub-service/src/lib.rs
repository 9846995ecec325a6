//! # chamahub-service
//!
//! Business logic for ChamaHub reporting: the financial aggregation engine,
//! the audit query engine, and the CSV/PDF export formatters.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod audit;
pub mod context;
pub mod export;
pub mod report;

pub use audit::AuditService;
pub use context::RequestContext;
pub use report::{ReportService, ReportType};
