//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate, with `CHAMAHUB_*` environment variables layered on top.
//! Each sub-module represents a logical configuration section.

pub mod database;
pub mod logging;
pub mod report;
pub mod server;

use serde::{Deserialize, Serialize};

pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::report::ReportConfig;
pub use self::server::ServerConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// configuration sources (TOML file + environment overrides).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Report and export settings.
    #[serde(default)]
    pub report: ReportConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file, with `CHAMAHUB_*` environment
    /// variables (double-underscore separated, e.g. `CHAMAHUB_DATABASE__URL`)
    /// overriding file values.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("CHAMAHUB").separator("__"))
            .build()?;
        Ok(cfg.try_deserialize()?)
    }
}
