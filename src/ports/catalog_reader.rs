//! Catalog Reader Port - read-side contract for methods, instruments and
//! teaching staff.

use async_trait::async_trait;

use crate::domain::catalog::{Instrument, Method, Teacher};

use super::ReaderError;

/// Port for reading catalog collections.
///
/// Like the student reader, implementations hand over complete, already
/// validated collections; this crate never writes them back.
#[async_trait]
pub trait CatalogReader: Send + Sync {
    /// Returns every registered teacher.
    async fn list_teachers(&self) -> Result<Vec<Teacher>, ReaderError>;

    /// Returns every instructional method.
    async fn list_methods(&self) -> Result<Vec<Method>, ReaderError>;

    /// Returns every instrument taught at the school.
    async fn list_instruments(&self) -> Result<Vec<Instrument>, ReaderError>;
}
