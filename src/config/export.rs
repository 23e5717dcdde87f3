//! Export configuration (Pandoc path, PDF timeout, HTML styling).

use serde::Deserialize;

use super::error::ValidationError;

/// Configuration for the report export service.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Path to the Pandoc executable. Searches PATH when unset.
    #[serde(default)]
    pub pandoc_path: Option<String>,

    /// Timeout for PDF conversion, in seconds.
    #[serde(default = "default_pdf_timeout_secs")]
    pub pdf_timeout_secs: u64,

    /// Include default CSS styling in HTML output.
    #[serde(default = "default_include_css")]
    pub include_default_css: bool,
}

fn default_pdf_timeout_secs() -> u64 {
    30
}

fn default_include_css() -> bool {
    true
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            pandoc_path: None,
            pdf_timeout_secs: default_pdf_timeout_secs(),
            include_default_css: default_include_css(),
        }
    }
}

impl ExportConfig {
    /// Validates semantic constraints.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.pdf_timeout_secs == 0 || self.pdf_timeout_secs > 600 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}
