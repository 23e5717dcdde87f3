//! Student Reader Port - read-side contract with the data access facade.
//!
//! The facade owns persistence; this crate only consumes fully-loaded
//! student records. Mutations (enrollment forms, lesson registration,
//! deletions) never pass through here.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::StudentId;
use crate::domain::student::Student;

/// Port for reading student records.
///
/// # Contract
///
/// Implementations must:
/// - Return fully-loaded records (lesson histories included, no paging)
/// - Return records already validated by the producing side
/// - Never expose partially-hydrated students
#[async_trait]
pub trait StudentReader: Send + Sync {
    /// Returns every student, in the facade's storage order.
    async fn list_students(&self) -> Result<Vec<Student>, ReaderError>;

    /// Returns one student by id.
    ///
    /// # Errors
    ///
    /// Returns `ReaderError::StudentNotFound` if the id is unknown.
    async fn get_student(&self, id: StudentId) -> Result<Student, ReaderError>;
}

/// Errors surfaced by read-side ports.
#[derive(Debug, Clone, Error)]
pub enum ReaderError {
    #[error("Student {0} not found")]
    StudentNotFound(StudentId),

    #[error("Storage backend failure: {0}")]
    Backend(String),
}

impl ReaderError {
    /// Creates a backend failure error.
    pub fn backend(message: impl Into<String>) -> Self {
        ReaderError::Backend(message.into())
    }
}
