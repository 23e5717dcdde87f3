//! Report Renderer Port - structured report to markdown.
//!
//! The assembler produces a typed document; renderers serialize it into a
//! textual form the export service can convert further. Rendering is pure
//! and synchronous.

use thiserror::Error;

use crate::domain::report::StudentReport;

/// Port for rendering an assembled report into markdown.
///
/// # Contract
///
/// Implementations must:
/// - Be deterministic: identical reports render to identical output
/// - Render every page, block and footer; no silent truncation
/// - Never mutate the report
pub trait ReportRenderer: Send + Sync {
    /// Renders the report to markdown.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the document is structurally unusable.
    fn render(&self, report: &StudentReport) -> Result<String, RenderError>;
}

/// Errors that can occur during rendering.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    #[error("Report has no pages")]
    EmptyDocument,

    #[error("Rendering failed: {0}")]
    Internal(String),
}

impl RenderError {
    /// Creates an internal rendering error.
    pub fn internal(message: impl Into<String>) -> Self {
        RenderError::Internal(message.into())
    }
}
