//! SaveStudentReportHandler - exports a report and persists it to storage.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::ports::{ReportFileStorage, StorageError};

use super::export_student_report::{
    ExportReportError, ExportStudentReportHandler, ExportStudentReportQuery,
};

/// Query to export and store a student report.
#[derive(Debug, Clone)]
pub struct SaveStudentReportQuery {
    pub export: ExportStudentReportQuery,
}

/// Errors surfaced by the save pipeline.
#[derive(Debug, Error)]
pub enum SaveReportError {
    #[error(transparent)]
    Export(#[from] ExportReportError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Handler composing the export pipeline with file storage.
pub struct SaveStudentReportHandler {
    export: ExportStudentReportHandler,
    storage: Arc<dyn ReportFileStorage>,
}

impl SaveStudentReportHandler {
    pub fn new(export: ExportStudentReportHandler, storage: Arc<dyn ReportFileStorage>) -> Self {
        Self { export, storage }
    }

    /// Exports the report and writes it to storage, returning the stored
    /// path.
    pub async fn handle(&self, query: SaveStudentReportQuery) -> Result<PathBuf, SaveReportError> {
        let document = self.export.handle(query.export).await?;
        let path = self.storage.store(&document).await?;
        tracing::debug!(path = %path.display(), "Report saved");
        Ok(path)
    }
}
