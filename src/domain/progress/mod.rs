//! Progress aggregation - method and hymn mastery views across students.

mod aggregator;

pub use aggregator::{content_progress, ContentKind, ContentProgress, ProgressFilter};
