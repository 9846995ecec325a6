//! # chamahub-database
//!
//! PostgreSQL connection management and concrete repository implementations
//! for the ChamaHub entities. Repositories are the persistence gateway
//! surface the aggregation and audit engines read through.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
