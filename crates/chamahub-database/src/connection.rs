//! PostgreSQL connection pool construction.

use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tracing::info;

use chamahub_core::config::DatabaseConfig;
use chamahub_core::error::{AppError, ErrorKind};

/// Handle over the sqlx pool for the reporting workload.
///
/// Every connection carries a server-side `statement_timeout` so a single
/// expensive aggregation cannot hold a pool slot indefinitely.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Build the pool from configuration. The URL is validated before any
    /// network I/O happens.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let statement_timeout = config.statement_timeout_ms.to_string();
        let options: PgConnectOptions = config.url.parse().map_err(|e| {
            AppError::with_source(ErrorKind::Configuration, "Invalid database URL", e)
        })?;
        let options = options.options([("statement_timeout", statement_timeout.as_str())]);

        info!(
            max_connections = config.max_connections,
            statement_timeout_ms = config.statement_timeout_ms,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect_with(options)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to connect to database: {e}"),
                    e,
                )
            })?;

        info!("Connected to PostgreSQL");
        Ok(Self { pool })
    }

    /// Return a reference to the underlying sqlx pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Return the underlying sqlx pool (consuming self).
    pub fn into_pool(self) -> PgPool {
        self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_url_rejected_before_connecting() {
        let config = DatabaseConfig {
            url: "not a connection url".to_string(),
            max_connections: 10,
            acquire_timeout_seconds: 5,
            idle_timeout_seconds: 600,
            statement_timeout_ms: 30_000,
        };
        let err = DatabasePool::connect(&config).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}
