//! Database configuration.
//!
//! Tuned for a read-heavy reporting workload: a small pool is enough for
//! the handful of concurrent report requests, and a server-side statement
//! timeout caps runaway aggregation queries.

use serde::{Deserialize, Serialize};

/// Database connection pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// How long a request may wait for a free connection, in seconds.
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_seconds: u64,
    /// Idle connection timeout in seconds.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_seconds: u64,
    /// Server-side `statement_timeout` in milliseconds, applied to every
    /// connection. Bounds the worst-case aggregation query.
    #[serde(default = "default_statement_timeout")]
    pub statement_timeout_ms: u64,
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout() -> u64 {
    5
}

fn default_idle_timeout() -> u64 {
    600
}

fn default_statement_timeout() -> u64 {
    30_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_url_is_required() {
        let cfg: DatabaseConfig =
            serde_json::from_str(r#"{"url": "postgres://localhost/chamahub"}"#).unwrap();
        assert_eq!(cfg.max_connections, 10);
        assert_eq!(cfg.acquire_timeout_seconds, 5);
        assert_eq!(cfg.statement_timeout_ms, 30_000);
    }
}
