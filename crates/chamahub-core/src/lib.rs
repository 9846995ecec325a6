//! # chamahub-core
//!
//! Core crate for ChamaHub. Contains configuration schemas, pagination and
//! date-window types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other ChamaHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
