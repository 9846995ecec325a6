//! Shared value types used across crates.

pub mod date_window;
pub mod pagination;

pub use date_window::DateWindow;
pub use pagination::{PageRequest, PageResponse};
