//! Audit log querying and export.

pub mod service;

pub use service::AuditService;
