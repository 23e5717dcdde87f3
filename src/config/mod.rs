//! Application configuration module
//!
//! Provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with
//! the `SINFONIA` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use sinfonia::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod export;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has development-friendly defaults; the environment only
/// needs to override what differs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Report export settings (Pandoc, timeouts, HTML styling)
    #[serde(default)]
    pub export: ExportConfig,

    /// Exported report storage settings
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `SINFONIA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `SINFONIA__EXPORT__PDF_TIMEOUT_SECS=60` -> `export.pdf_timeout_secs = 60`
    /// - `SINFONIA__STORAGE__REPORT_DIR=/var/reports` -> `storage.report_dir = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SINFONIA")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.export.validate()?;
        self.storage.validate()?;
        Ok(())
    }
}
