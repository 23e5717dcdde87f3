//! Local filesystem storage adapter for exported reports.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::config::StorageConfig;
use crate::ports::{ExportedDocument, ReportFileStorage, StorageError};

/// Stores exported reports under a base directory on the local filesystem.
///
/// The directory is created on first write. Filenames come from the
/// document itself, so repeated exports of the same student overwrite the
/// previous file.
#[derive(Debug, Clone)]
pub struct LocalReportFileStorage {
    base_dir: PathBuf,
}

impl LocalReportFileStorage {
    /// Creates storage rooted at the given directory.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Creates storage from loaded configuration.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.report_dir)
    }

    /// Returns the base directory.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

#[async_trait]
impl ReportFileStorage for LocalReportFileStorage {
    async fn store(&self, document: &ExportedDocument) -> Result<PathBuf, StorageError> {
        tokio::fs::create_dir_all(&self.base_dir).await.map_err(|e| {
            StorageError::create_dir_failed(self.base_dir.display().to_string(), e.to_string())
        })?;

        let path = self.base_dir.join(&document.filename);
        tokio::fs::write(&path, &document.content)
            .await
            .map_err(|e| StorageError::write_failed(path.display().to_string(), e.to_string()))?;

        tracing::debug!(path = %path.display(), "Stored exported report");
        Ok(path)
    }
}
