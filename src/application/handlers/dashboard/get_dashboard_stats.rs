//! GetDashboardStatsHandler - Query handler for the dashboard headline
//! counts.

use std::sync::Arc;

use crate::domain::dashboard::DashboardStats;
use crate::ports::{ReaderError, StudentReader};

/// Query for the dashboard statistics. Carries no parameters; the stats
/// always cover the whole roster.
#[derive(Debug, Clone, Default)]
pub struct GetDashboardStatsQuery;

/// Handler computing the dashboard statistics.
pub struct GetDashboardStatsHandler {
    students: Arc<dyn StudentReader>,
}

impl GetDashboardStatsHandler {
    pub fn new(students: Arc<dyn StudentReader>) -> Self {
        Self { students }
    }

    pub async fn handle(
        &self,
        _query: GetDashboardStatsQuery,
    ) -> Result<DashboardStats, ReaderError> {
        let students = self.students.list_students().await?;
        Ok(DashboardStats::from_students(&students))
    }
}
