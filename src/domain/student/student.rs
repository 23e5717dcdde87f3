//! Student aggregate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{LearningPhase, StudentId, TeacherId};

use super::Lesson;

/// A student enrolled at the school.
///
/// The lesson history belongs exclusively to this student; no lesson record
/// is ever shared between students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    /// Name of the instrument the student studies.
    pub instrument: String,
    pub phase: LearningPhase,
    pub teacher_id: TeacherId,
    pub active: bool,
    pub enrollment_date: NaiveDate,
    pub lessons: Vec<Lesson>,
    pub is_orchestra_ready: bool,
}

impl Student {
    /// Appends a lesson to the history.
    pub fn record_lesson(&mut self, lesson: Lesson) {
        self.lessons.push(lesson);
    }

    /// Total exercises mastered across all lessons.
    ///
    /// Sums the raw list lengths; an exercise mastered in two different
    /// lessons counts twice. The progress aggregator deduplicates, this
    /// total deliberately does not.
    pub fn total_exercises_mastered(&self) -> usize {
        self.lessons
            .iter()
            .map(|l| l.exercises_mastered.len())
            .sum()
    }

    /// Total hymns mastered across all lessons, non-deduplicated.
    pub fn total_hymns_mastered(&self) -> usize {
        self.lessons.iter().map(|l| l.hymns_mastered.len()).sum()
    }
}
