//! GetContentProgressHandler - Query handler for the method and hymn
//! progress views.
//!
//! Fetches the full roster from the facade and runs the progress
//! aggregator over it.

use std::sync::Arc;

use crate::domain::foundation::StudentId;
use crate::domain::progress::{content_progress, ContentKind, ContentProgress, ProgressFilter};
use crate::ports::{ReaderError, StudentReader};

/// Query for one of the content progress views.
#[derive(Debug, Clone)]
pub struct GetContentProgressQuery {
    /// Which mastery list to aggregate.
    pub kind: ContentKind,
    /// Optional case-insensitive substring filter on the content key.
    pub key_contains: Option<String>,
    /// Optional restriction to a single student.
    pub student_id: Option<StudentId>,
}

/// Handler for the method/hymn progress views.
pub struct GetContentProgressHandler {
    students: Arc<dyn StudentReader>,
}

impl GetContentProgressHandler {
    pub fn new(students: Arc<dyn StudentReader>) -> Self {
        Self { students }
    }

    pub async fn handle(
        &self,
        query: GetContentProgressQuery,
    ) -> Result<Vec<ContentProgress>, ReaderError> {
        let students = self.students.list_students().await?;
        tracing::debug!(
            students = students.len(),
            kind = ?query.kind,
            "Aggregating content progress"
        );

        let filter = ProgressFilter {
            key_contains: query.key_contains,
            student_id: query.student_id,
        };
        Ok(content_progress(&students, query.kind, &filter))
    }
}
