//! Financial report generation: aggregation engine and file export entry.

pub mod export;
pub mod service;
pub mod types;

pub use export::{ExportFormat, ReportFile, ReportType};
pub use service::ReportService;
pub use types::{CashflowReport, FinancialAggregates, FinancialSummary, LoanPortfolioReport};
