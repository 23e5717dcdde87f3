//! Lesson record and evaluation types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{LessonId, Score};

/// Technical evaluation captured during a lesson.
///
/// Sub-scores are optional: a missing score is rendered as a placeholder,
/// never as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub technique: Option<Score>,
    pub rhythm: Option<Score>,
    pub reading: Option<Score>,
    /// Date the evaluation applies to.
    pub date: NaiveDate,
}

impl Evaluation {
    /// Creates an evaluation with all three sub-scores present.
    pub fn new(technique: Score, rhythm: Score, reading: Score, date: NaiveDate) -> Self {
        Self {
            technique: Some(technique),
            rhythm: Some(rhythm),
            reading: Some(reading),
            date,
        }
    }
}

/// A single lesson in a student's history.
///
/// Lessons are exclusively owned by one student; the record is plain data
/// as supplied by the data access facade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: LessonId,
    pub date: NaiveDate,
    pub present: bool,
    pub observation: String,
    pub exercises_mastered: Vec<String>,
    pub hymns_mastered: Vec<String>,
    /// Absent in stored records when the lesson had no evaluation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<Evaluation>,
}

impl Lesson {
    /// Builds a lesson from a form-boundary entry.
    pub fn from_entry(id: LessonId, entry: LessonEntry) -> Self {
        match entry {
            LessonEntry::Present {
                date,
                observation,
                exercises_mastered,
                hymns_mastered,
                evaluation,
            } => Self {
                id,
                date,
                present: true,
                observation,
                exercises_mastered,
                hymns_mastered,
                evaluation,
            },
            LessonEntry::Absent { date } => Self {
                id,
                date,
                present: false,
                observation: String::new(),
                exercises_mastered: Vec::new(),
                hymns_mastered: Vec::new(),
                evaluation: None,
            },
        }
    }

    /// Returns true if the lesson carries an evaluation.
    pub fn has_evaluation(&self) -> bool {
        self.evaluation.is_some()
    }
}

/// Form-boundary lesson payload, tagged by attendance.
///
/// The lesson form only collects observation, mastery lists and evaluation
/// when the student was present; an absent entry stores none of them. This
/// variant makes that convention explicit before a `Lesson` is constructed,
/// instead of leaving optional-field ambiguity to downstream readers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LessonEntry {
    Present {
        date: NaiveDate,
        observation: String,
        exercises_mastered: Vec<String>,
        hymns_mastered: Vec<String>,
        evaluation: Option<Evaluation>,
    },
    Absent {
        date: NaiveDate,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn present_entry_keeps_mastery_and_evaluation() {
        let evaluation = Evaluation::new(
            Score::try_new(8).unwrap(),
            Score::try_new(7).unwrap(),
            Score::try_new(7).unwrap(),
            date(2023, 10, 1),
        );
        let lesson = Lesson::from_entry(
            LessonId::new(),
            LessonEntry::Present {
                date: date(2023, 10, 1),
                observation: "Boa postura".to_string(),
                exercises_mastered: vec!["Schmoll 21".to_string()],
                hymns_mastered: vec!["Hino 5".to_string()],
                evaluation: Some(evaluation),
            },
        );

        assert!(lesson.present);
        assert_eq!(lesson.exercises_mastered, vec!["Schmoll 21"]);
        assert_eq!(lesson.hymns_mastered, vec!["Hino 5"]);
        assert!(lesson.has_evaluation());
    }

    #[test]
    fn absent_entry_stores_empty_content() {
        let lesson = Lesson::from_entry(
            LessonId::new(),
            LessonEntry::Absent {
                date: date(2023, 10, 8),
            },
        );

        assert!(!lesson.present);
        assert!(lesson.observation.is_empty());
        assert!(lesson.exercises_mastered.is_empty());
        assert!(lesson.hymns_mastered.is_empty());
        assert!(!lesson.has_evaluation());
    }

    #[test]
    fn lesson_round_trips_through_json() {
        let lesson = Lesson {
            id: LessonId::new(),
            date: date(2023, 10, 1),
            present: true,
            observation: "Afinação".to_string(),
            exercises_mastered: vec!["Bona 3".to_string()],
            hymns_mastered: vec![],
            evaluation: None,
        };

        let json = serde_json::to_string(&lesson).unwrap();
        assert!(json.contains("\"exercisesMastered\""));
        assert!(json.contains("\"hymnsMastered\""));

        let back: Lesson = serde_json::from_str(&json).unwrap();
        assert_eq!(back, lesson);
    }

    #[test]
    fn evaluation_allows_missing_sub_scores() {
        let evaluation = Evaluation {
            technique: Some(Score::try_new(9).unwrap()),
            rhythm: None,
            reading: None,
            date: date(2023, 11, 5),
        };
        assert_eq!(evaluation.technique.unwrap().value(), 9);
        assert!(evaluation.rhythm.is_none());
    }
}
