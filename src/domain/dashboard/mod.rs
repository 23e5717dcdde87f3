//! Dashboard read models.

mod stats;

pub use stats::DashboardStats;
