//! Pulldown-cmark based export service adapter.
//!
//! Implements the `ReportExportService` port:
//! - HTML conversion with pulldown-cmark (pure Rust, always available)
//! - PDF conversion through a Pandoc subprocess (requires Pandoc on the
//!   host; reported as unavailable otherwise)

use std::process::Stdio;

use async_trait::async_trait;
use pulldown_cmark::{html, Options, Parser};
use tokio::process::Command;

use crate::config::ExportConfig;
use crate::ports::{ExportError, ReportExportService};

/// Export service using pulldown-cmark for HTML and Pandoc for PDF.
#[derive(Debug, Clone)]
pub struct PulldownExportService {
    /// Path to the pandoc executable. If None, searches PATH.
    pandoc_path: Option<String>,

    /// Timeout for PDF conversion in seconds.
    pdf_timeout_secs: u64,

    /// Include default CSS styling in HTML output.
    include_default_css: bool,
}

impl Default for PulldownExportService {
    fn default() -> Self {
        Self::new()
    }
}

impl PulldownExportService {
    /// Creates a new export service with default settings.
    pub fn new() -> Self {
        Self {
            pandoc_path: None,
            pdf_timeout_secs: 30,
            include_default_css: true,
        }
    }

    /// Creates an export service from loaded configuration.
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            pandoc_path: config.pandoc_path.clone(),
            pdf_timeout_secs: config.pdf_timeout_secs,
            include_default_css: config.include_default_css,
        }
    }

    /// Sets a custom path to the Pandoc executable.
    pub fn with_pandoc_path(mut self, path: impl Into<String>) -> Self {
        self.pandoc_path = Some(path.into());
        self
    }

    /// Sets the timeout for PDF conversion.
    pub fn with_pdf_timeout(mut self, timeout_secs: u64) -> Self {
        self.pdf_timeout_secs = timeout_secs;
        self
    }

    /// Disables default CSS styling for HTML output.
    pub fn without_default_css(mut self) -> Self {
        self.include_default_css = false;
        self
    }

    fn pandoc_command(&self) -> &str {
        self.pandoc_path.as_deref().unwrap_or("pandoc")
    }

    /// Wraps HTML content in a complete document with styling.
    fn wrap_html(&self, body: String, title: &str) -> String {
        let css = if self.include_default_css {
            DEFAULT_CSS
        } else {
            ""
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <article class="student-report">
{body}
    </article>
</body>
</html>"#,
            title = html_escape(title),
            css = css,
            body = body
        )
    }

    /// Extracts the document title (first h1 heading).
    fn extract_title(&self, markdown: &str) -> String {
        for line in markdown.lines() {
            if let Some(title) = line.trim().strip_prefix("# ") {
                return title.trim().to_string();
            }
        }
        "Relatorio".to_string()
    }

    /// Checks if Pandoc is installed and accessible.
    async fn check_pandoc(&self) -> bool {
        let output = Command::new(self.pandoc_command())
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await;

        output.map(|o| o.status.success()).unwrap_or(false)
    }
}

#[async_trait]
impl ReportExportService for PulldownExportService {
    async fn to_pdf(&self, markdown: &str) -> Result<Vec<u8>, ExportError> {
        if !self.check_pandoc().await {
            tracing::warn!("Pandoc not found; PDF export unavailable");
            return Err(ExportError::service_unavailable(
                "Pandoc is not installed. PDF export requires Pandoc. \
                 Install from https://pandoc.org/installing.html",
            ));
        }

        let mut child = Command::new(self.pandoc_command())
            .args([
                "-f",
                "markdown",
                "-t",
                "pdf",
                "--pdf-engine=xelatex",
                "-V",
                "geometry:margin=1in",
                "-V",
                "fontsize=11pt",
            ])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ExportError::conversion_failed(format!("Failed to start Pandoc: {}", e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            use tokio::io::AsyncWriteExt;
            stdin.write_all(markdown.as_bytes()).await.map_err(|e| {
                ExportError::conversion_failed(format!("Failed to write to Pandoc: {}", e))
            })?;
        }

        let output = tokio::time::timeout(
            std::time::Duration::from_secs(self.pdf_timeout_secs),
            child.wait_with_output(),
        )
        .await
        .map_err(|_| ExportError::Timeout(self.pdf_timeout_secs))?
        .map_err(|e| ExportError::conversion_failed(format!("Pandoc execution failed: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExportError::conversion_failed(format!(
                "Pandoc returned error: {}",
                stderr.trim()
            )));
        }

        Ok(output.stdout)
    }

    async fn to_html(&self, markdown: &str) -> Result<String, ExportError> {
        // The report's pipe tables need table support enabled.
        let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;

        let parser = Parser::new_ext(markdown, options);
        let mut html_body = String::new();
        html::push_html(&mut html_body, parser);

        let title = self.extract_title(markdown);
        Ok(self.wrap_html(html_body, &title))
    }

    async fn is_available(&self) -> bool {
        // HTML conversion is always available (pure Rust).
        true
    }
}

/// Escapes HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Default CSS for styled HTML report output.
const DEFAULT_CSS: &str = r#"
:root {
    --primary-color: #2563eb;
    --text-color: #0f172a;
    --muted-color: #64748b;
    --border-color: #e2e8f0;
    --band-bg: #eff6ff;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
    font-size: 15px;
    line-height: 1.6;
    color: var(--text-color);
    margin: 0 auto;
    padding: 2rem;
    max-width: 840px;
}

.student-report {
    padding: 1rem;
}

h1 {
    font-size: 1.75rem;
    background-color: var(--primary-color);
    color: #ffffff;
    padding: 0.75rem 1rem;
    border-radius: 6px;
}

h2 {
    font-size: 1.35rem;
    border-bottom: 1px solid var(--border-color);
    padding-bottom: 0.25rem;
}

h3 {
    font-size: 1.1rem;
    margin-top: 1.5em;
}

blockquote {
    margin: 1em 0;
    padding: 0.4em 1em;
    border-left: 4px solid var(--primary-color);
    background-color: var(--band-bg);
    color: var(--muted-color);
}

blockquote p {
    margin: 0;
}

table {
    width: 100%;
    border-collapse: collapse;
    margin: 1em 0;
}

th, td {
    padding: 0.45rem;
    text-align: left;
    border: 1px solid var(--border-color);
}

th {
    background-color: var(--band-bg);
    font-weight: 600;
}

tr:nth-child(even) {
    background-color: #f8fafc;
}

hr {
    border: none;
    border-top: 1px dashed var(--border-color);
    margin: 2em 0;
}

em {
    color: var(--muted-color);
    font-size: 0.85em;
}
"#;
