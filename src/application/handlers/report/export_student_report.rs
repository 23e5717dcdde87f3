//! ExportStudentReportHandler - assembles and exports one student's report.
//!
//! The generation timestamp is part of the query, so the same query always
//! produces the same document. Export failures are surfaced to the caller
//! as user-visible errors and never retried here; the user re-triggers the
//! export if desired.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::foundation::StudentId;
use crate::domain::report::assemble;
use crate::ports::{
    ExportError, ExportFormat, ExportedDocument, ReaderError, RenderError, ReportExportService,
    ReportRenderer, StudentReader,
};

/// Query to export a student report.
#[derive(Debug, Clone)]
pub struct ExportStudentReportQuery {
    pub student_id: StudentId,
    pub format: ExportFormat,
    /// Caller-supplied generation timestamp, stamped into the header band.
    pub generated_at: DateTime<Utc>,
}

/// Errors surfaced by the export pipeline.
#[derive(Debug, Error)]
pub enum ExportReportError {
    #[error(transparent)]
    Reader(#[from] ReaderError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Handler for the report export use case.
pub struct ExportStudentReportHandler {
    students: Arc<dyn StudentReader>,
    renderer: Arc<dyn ReportRenderer>,
    exporter: Arc<dyn ReportExportService>,
}

impl ExportStudentReportHandler {
    pub fn new(
        students: Arc<dyn StudentReader>,
        renderer: Arc<dyn ReportRenderer>,
        exporter: Arc<dyn ReportExportService>,
    ) -> Self {
        Self {
            students,
            renderer,
            exporter,
        }
    }

    pub async fn handle(
        &self,
        query: ExportStudentReportQuery,
    ) -> Result<ExportedDocument, ExportReportError> {
        let student = self.students.get_student(query.student_id).await?;
        tracing::debug!(student = %student.name, format = %query.format, "Exporting report");

        let report = assemble(&student, query.generated_at);
        let markdown = self.renderer.render(&report)?;

        let document = match query.format {
            ExportFormat::Markdown => ExportedDocument::new(
                markdown.into_bytes(),
                &report.file_stem,
                ExportFormat::Markdown,
            ),
            ExportFormat::Html => {
                let html = self.exporter.to_html(&markdown).await.map_err(|e| {
                    tracing::warn!(error = %e, "HTML export failed");
                    e
                })?;
                ExportedDocument::new(html.into_bytes(), &report.file_stem, ExportFormat::Html)
            }
            ExportFormat::Pdf => {
                let pdf = self.exporter.to_pdf(&markdown).await.map_err(|e| {
                    tracing::warn!(error = %e, "PDF export failed");
                    e
                })?;
                ExportedDocument::new(pdf, &report.file_stem, ExportFormat::Pdf)
            }
        };

        Ok(document)
    }
}
