//! Markdown report renderer adapter.
//!
//! Serializes an assembled report into markdown: the header band becomes a
//! title and generation line, tables become pipe tables, and pages are
//! separated by horizontal rules with the footer as the last line of each
//! page. This is the primary implementation of the `ReportRenderer` port.

use crate::domain::report::{IdentityBlock, ReportBlock, ReportPage, ReportTable, StudentReport};
use crate::ports::{RenderError, ReportRenderer};

/// Markdown implementation of `ReportRenderer`.
#[derive(Debug, Clone, Default)]
pub struct MarkdownReportRenderer;

impl MarkdownReportRenderer {
    /// Creates a new markdown renderer.
    pub fn new() -> Self {
        Self
    }

    fn render_page(&self, page: &ReportPage, out: &mut String) {
        for block in &page.blocks {
            match block {
                ReportBlock::HeaderBand {
                    title,
                    generated_at,
                } => {
                    out.push_str(&format!("# {}\n\n> {}\n\n", title, generated_at));
                }
                ReportBlock::Identity(identity) => self.render_identity(identity, out),
                ReportBlock::Table(table) => self.render_table(table, out),
                // Page breaks are consumed by pagination; none survive here.
                ReportBlock::PageBreak => {}
            }
        }
        out.push_str(&format!(
            "*{} | Pagina {} de {}*\n",
            page.footer.label, page.footer.page, page.footer.page_count
        ));
    }

    fn render_identity(&self, identity: &IdentityBlock, out: &mut String) {
        out.push_str(&format!("## {}\n\n", identity.name));
        out.push_str(&format!("**Instrumento:** {}\n\n", identity.instrument));
        out.push_str(&format!("**Fase Atual:** {}\n\n", identity.phase));
        out.push_str(&format!(
            "**Data de Matricula:** {}\n\n",
            identity.enrollment_date
        ));
        out.push_str(&format!(
            "**Status Orquestra:** {}\n\n",
            identity.orchestra_status
        ));
    }

    fn render_table(&self, table: &ReportTable, out: &mut String) {
        if table.continued {
            out.push_str(&format!("### {} (continuacao)\n\n", table.title));
        } else {
            out.push_str(&format!("### {}\n\n", table.title));
        }

        out.push('|');
        for header in &table.headers {
            out.push_str(&format!(" {} |", escape_cell(header)));
        }
        out.push_str("\n|");
        for _ in &table.headers {
            out.push_str("---|");
        }
        out.push('\n');

        for row in &table.rows {
            out.push('|');
            for cell in row {
                out.push_str(&format!(" {} |", escape_cell(cell)));
            }
            out.push('\n');
        }
        out.push('\n');
    }
}

impl ReportRenderer for MarkdownReportRenderer {
    fn render(&self, report: &StudentReport) -> Result<String, RenderError> {
        if report.pages.is_empty() {
            return Err(RenderError::EmptyDocument);
        }

        let mut out = String::new();
        for (i, page) in report.pages.iter().enumerate() {
            if i > 0 {
                out.push_str("\n---\n\n");
            }
            self.render_page(page, &mut out);
        }
        Ok(out)
    }
}

/// Escapes characters that would break a pipe table cell.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
