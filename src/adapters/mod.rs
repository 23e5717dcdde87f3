//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `document` - Report rendering, export and storage

pub mod document;

pub use document::{LocalReportFileStorage, MarkdownReportRenderer, PulldownExportService};
