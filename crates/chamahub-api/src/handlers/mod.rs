//! HTTP request handlers, organized by domain.

pub mod audit;
pub mod health;
pub mod report;
