//! Dashboard statistics - headline counts over the student roster.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::student::Student;

/// Aggregate counts shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_students: usize,
    pub active_students: usize,
    pub orchestra_ready: usize,
    /// Student count per instrument name, in stable name order.
    pub students_by_instrument: BTreeMap<String, usize>,
}

impl DashboardStats {
    /// Computes stats from the full roster. Pure; recompute on every change.
    pub fn from_students(students: &[Student]) -> Self {
        let mut by_instrument: BTreeMap<String, usize> = BTreeMap::new();
        for student in students {
            *by_instrument.entry(student.instrument.clone()).or_insert(0) += 1;
        }

        Self {
            total_students: students.len(),
            active_students: students.iter().filter(|s| s.active).count(),
            orchestra_ready: students.iter().filter(|s| s.is_orchestra_ready).count(),
            students_by_instrument: by_instrument,
        }
    }
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;
