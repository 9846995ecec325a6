//! Export formatters.
//!
//! Both formatters are pure functions of the input row sequence: no I/O, no
//! row limit of their own, and a defined result for zero rows (a header-only
//! CSV, or a PDF with a placeholder line). Capping the row count is the
//! querying caller's concern.

pub mod csv;
pub mod pdf;
