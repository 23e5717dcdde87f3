//! Progress aggregator - groups mastered lesson content across students.
//!
//! Scans every student's lesson history and produces, per exercise or hymn
//! key, how many distinct students mastered it and who they are. Pure over
//! its inputs: safe to recompute whenever the student list changes.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::domain::foundation::StudentId;
use crate::domain::student::Student;

/// Which mastery list a progress view reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// Method exercises; entries sort by descending student count.
    Exercise,
    /// Hymns; entries sort ascending by the numeric portion of the key.
    Hymn,
}

/// Optional restrictions applied to an aggregation.
#[derive(Debug, Clone, Default)]
pub struct ProgressFilter {
    /// Case-insensitive substring match against the content key.
    pub key_contains: Option<String>,
    /// Restrict the scan to a single student.
    pub student_id: Option<StudentId>,
}

/// Aggregate progress for one content key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentProgress {
    pub key: String,
    /// Number of distinct students who mastered the key.
    pub count: usize,
    /// Display names, in student iteration order.
    pub students: Vec<String>,
}

/// Groups mastered content keys across the given students.
///
/// Each student contributes each key at most once, no matter how many
/// lessons repeat it. Student names are appended in input order; ties in
/// either sort mode keep the order in which a key was first encountered.
pub fn content_progress(
    students: &[Student],
    kind: ContentKind,
    filter: &ProgressFilter,
) -> Vec<ContentProgress> {
    let mut entries: Vec<ContentProgress> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for student in students {
        if let Some(only) = filter.student_id {
            if student.id != only {
                continue;
            }
        }

        // Dedup within one student's whole history.
        let mut seen: HashSet<&str> = HashSet::new();
        for lesson in &student.lessons {
            let keys = match kind {
                ContentKind::Exercise => &lesson.exercises_mastered,
                ContentKind::Hymn => &lesson.hymns_mastered,
            };
            for key in keys {
                if !seen.insert(key.as_str()) {
                    continue;
                }
                let slot = match index.get(key.as_str()) {
                    Some(&slot) => slot,
                    None => {
                        entries.push(ContentProgress {
                            key: key.clone(),
                            count: 0,
                            students: Vec::new(),
                        });
                        let slot = entries.len() - 1;
                        index.insert(key.clone(), slot);
                        slot
                    }
                };
                entries[slot].count += 1;
                entries[slot].students.push(student.name.clone());
            }
        }
    }

    if let Some(needle) = &filter.key_contains {
        let needle = needle.to_lowercase();
        entries.retain(|e| e.key.to_lowercase().contains(&needle));
    }

    match kind {
        // Stable sorts keep first-encounter order on ties.
        ContentKind::Exercise => entries.sort_by(|a, b| b.count.cmp(&a.count)),
        ContentKind::Hymn => entries.sort_by_key(|e| numeric_portion(&e.key)),
    }

    entries
}

/// Extracts the numeric portion of a key: digits only, everything else
/// stripped. Keys with no digits sort as zero.
fn numeric_portion(key: &str) -> u64 {
    let digits: String = key.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}
