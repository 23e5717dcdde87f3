//! Report File Storage Port - persisting exported documents.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use super::ExportedDocument;

/// Port for storing exported report files.
///
/// Implementations decide where documents live; the filename inside the
/// document is authoritative and must be preserved.
#[async_trait]
pub trait ReportFileStorage: Send + Sync {
    /// Stores the document and returns the path it was written to.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the document cannot be persisted.
    async fn store(&self, document: &ExportedDocument) -> Result<PathBuf, StorageError>;
}

/// Errors that can occur while storing a document.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("Failed to create storage directory {path}: {reason}")]
    CreateDirFailed { path: String, reason: String },

    #[error("Failed to write {path}: {reason}")]
    WriteFailed { path: String, reason: String },
}

impl StorageError {
    /// Creates a directory creation error.
    pub fn create_dir_failed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        StorageError::CreateDirFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Creates a write failure error.
    pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        StorageError::WriteFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
