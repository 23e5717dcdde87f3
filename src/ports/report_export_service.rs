//! Report Export Service Port - format conversion interface.
//!
//! Defines the contract for converting rendered markdown into downloadable
//! formats (PDF, HTML). The application layer depends on this trait; the
//! pulldown/Pandoc adapter provides the implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Port for exporting rendered reports to other formats.
///
/// # Contract
///
/// Implementations must:
/// - Convert valid markdown to the target format without altering content
/// - Report clear errors for conversion failures; callers surface them to
///   the user and may re-trigger the export, the service never retries
/// - Leave the input untouched
#[async_trait]
pub trait ReportExportService: Send + Sync {
    /// Converts markdown content to PDF bytes.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if conversion fails or the converter is
    /// unavailable.
    async fn to_pdf(&self, markdown: &str) -> Result<Vec<u8>, ExportError>;

    /// Converts markdown content to a complete HTML document.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if conversion fails.
    async fn to_html(&self, markdown: &str) -> Result<String, ExportError>;

    /// Checks whether the service can perform basic conversions.
    async fn is_available(&self) -> bool;
}

/// Export formats supported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Raw markdown (no conversion needed).
    Markdown,
    /// PDF document.
    Pdf,
    /// HTML document.
    Html,
}

impl ExportFormat {
    /// Gets the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Html => "text/html; charset=utf-8",
        }
    }

    /// Gets the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Html => "html",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Markdown => write!(f, "markdown"),
            ExportFormat::Pdf => write!(f, "pdf"),
            ExportFormat::Html => write!(f, "html"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "pdf" => Ok(ExportFormat::Pdf),
            "html" | "htm" => Ok(ExportFormat::Html),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Exported document with content and download metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    /// The exported content as bytes.
    pub content: Vec<u8>,
    /// The MIME content type.
    pub content_type: String,
    /// Deterministic filename for download.
    pub filename: String,
    /// The format that was used.
    pub format: ExportFormat,
}

impl ExportedDocument {
    /// Creates an exported document, deriving filename and content type
    /// from the file stem and format.
    pub fn new(content: Vec<u8>, file_stem: &str, format: ExportFormat) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: format!("{}.{}", file_stem, format.extension()),
            format,
        }
    }
}

/// Errors that can occur during export.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("Export service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Conversion failed: {0}")]
    ConversionFailed(String),

    #[error("Conversion timed out after {0}s")]
    Timeout(u64),
}

impl ExportError {
    /// Creates a service unavailable error.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        ExportError::ServiceUnavailable(message.into())
    }

    /// Creates a conversion failure error.
    pub fn conversion_failed(message: impl Into<String>) -> Self {
        ExportError::ConversionFailed(message.into())
    }
}

// ════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════
