//! Instructional method entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MethodId, Percentage};

/// Sentinel instrument name meaning the method applies to every instrument.
pub const ALL_INSTRUMENTS: &str = "Todos";

/// Which instruments a method applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstrumentScope {
    /// Applies to every instrument.
    All,
    /// Applies to one named instrument.
    Named(String),
}

/// A named instructional curriculum (technique book, study collection).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    pub id: MethodId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Denominator for lesson-progress display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_lessons: Option<u32>,
    /// Denominator for exercise-progress display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_exercises: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_phases: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_phases: Option<u32>,
    /// Instrument name, or the `ALL_INSTRUMENTS` sentinel. Absent means
    /// unrestricted as well.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<String>,
}

impl Method {
    /// Resolves the raw instrument field into a scope.
    pub fn instrument_scope(&self) -> InstrumentScope {
        match self.instrument.as_deref() {
            None | Some(ALL_INSTRUMENTS) => InstrumentScope::All,
            Some(name) => InstrumentScope::Named(name.to_string()),
        }
    }

    /// Returns true if the method applies to the named instrument.
    pub fn applies_to(&self, instrument: &str) -> bool {
        match self.instrument_scope() {
            InstrumentScope::All => true,
            InstrumentScope::Named(name) => name == instrument,
        }
    }

    /// Completion of `mastered` exercises against the declared total, if any.
    pub fn exercise_completion(&self, mastered: usize) -> Option<Percentage> {
        self.total_exercises
            .map(|total| Percentage::of(mastered, total as usize))
    }

    /// Completion of `done` lessons against the declared total, if any.
    pub fn lesson_completion(&self, done: usize) -> Option<Percentage> {
        self.total_lessons
            .map(|total| Percentage::of(done, total as usize))
    }
}
