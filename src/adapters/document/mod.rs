//! Document adapters - Implementations of the report document ports.
//!
//! - `MarkdownReportRenderer` - Renders the assembled report to markdown
//! - `PulldownExportService` - Converts markdown to HTML/PDF
//! - `LocalReportFileStorage` - Stores exported reports on disk

mod local_file_storage;
mod markdown_renderer;
mod pulldown_export_service;

pub use local_file_storage::LocalReportFileStorage;
pub use markdown_renderer::MarkdownReportRenderer;
pub use pulldown_export_service::PulldownExportService;
