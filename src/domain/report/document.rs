//! Typed description of a student report document.
//!
//! The assembler produces this structure; renderers turn it into markdown,
//! HTML or PDF. Every label is fixed here so the document is deterministic
//! for a given student and generation timestamp.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Report title shown in the header band.
pub const REPORT_TITLE: &str = "Relatorio Individual do Aluno";

/// Product label repeated in every page footer.
pub const FOOTER_LABEL: &str = "Sinfonia CCB - Gestao Musical";

/// Placeholder for empty cells and missing optional values.
pub const PLACEHOLDER: &str = "-";

/// Marker word prefixed to hymn labels in the combined content column.
pub const HYMN_PREFIX: &str = "Hino ";

/// Orchestra status labels.
pub const ORCHESTRA_READY_LABEL: &str = "APTO";
pub const ORCHESTRA_STUDYING_LABEL: &str = "EM ESTUDO";

/// Attendance labels.
pub const PRESENT_LABEL: &str = "Presente";
pub const ABSENT_LABEL: &str = "Faltou";

/// A titled table within the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// True when this chunk continues a table split across pages.
    pub continued: bool,
}

impl ReportTable {
    /// Creates a table from static headers and assembled rows.
    pub fn new(title: &str, headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        Self {
            title: title.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows,
            continued: false,
        }
    }
}

/// Student identity fields, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityBlock {
    pub name: String,
    pub instrument: String,
    pub phase: String,
    pub enrollment_date: String,
    pub orchestra_status: String,
}

/// One typed section of the report, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ReportBlock {
    HeaderBand {
        title: String,
        generated_at: String,
    },
    Identity(IdentityBlock),
    Table(ReportTable),
    /// Forces the following block onto a new page.
    PageBreak,
}

/// Footer stamped on every page once the page count is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFooter {
    pub label: String,
    pub page: u32,
    pub page_count: u32,
}

/// A laid-out page of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPage {
    pub number: u32,
    pub blocks: Vec<ReportBlock>,
    pub footer: PageFooter,
}

/// The assembled, paginated report for one student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentReport {
    /// Deterministic file name stem derived from the student name.
    pub file_stem: String,
    pub pages: Vec<ReportPage>,
}

impl StudentReport {
    /// Total number of pages.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }
}

/// Formats a date in the report's fixed day/month/year form.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Formats the generation timestamp line for the header band.
pub fn format_generated_at(at: DateTime<Utc>) -> String {
    format!(
        "Gerado em: {} as {}",
        at.format("%d/%m/%Y"),
        at.format("%H:%M")
    )
}

/// Derives the download file stem from a student name: non-alphanumeric
/// characters are dropped and whitespace runs become underscores.
pub fn report_file_stem(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    let joined = cleaned.split_whitespace().collect::<Vec<_>>().join("_");
    format!("Relatorio_{}", joined)
}
