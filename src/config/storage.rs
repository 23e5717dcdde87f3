//! Storage configuration for exported reports.

use serde::Deserialize;

use super::error::ValidationError;

/// Configuration for report file storage.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory exported reports are written to.
    #[serde(default = "default_report_dir")]
    pub report_dir: String,
}

fn default_report_dir() -> String {
    "reports".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            report_dir: default_report_dir(),
        }
    }
}

impl StorageConfig {
    /// Validates semantic constraints.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.report_dir.trim().is_empty() {
            return Err(ValidationError::MissingRequired("storage.report_dir"));
        }
        Ok(())
    }
}
