//! Report and export configuration.

use serde::{Deserialize, Serialize};

/// Settings for report generation and file export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Maximum number of rows materialized for a single export file.
    ///
    /// Export callers request one page of this size instead of paginating;
    /// anything beyond it is truncated at the query, never in the formatter.
    #[serde(default = "default_max_export_rows")]
    pub max_export_rows: u64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_export_rows: default_max_export_rows(),
        }
    }
}

fn default_max_export_rows() -> u64 {
    10_000
}
