//! Teacher entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{StaffRole, TeacherId};

/// A staff member who teaches at the school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: TeacherId,
    pub name: String,
    /// Names of the instruments this teacher covers.
    pub instruments: Vec<String>,
    pub role: StaffRole,
}

impl Teacher {
    /// Returns true if the teacher covers the named instrument.
    pub fn teaches(&self, instrument: &str) -> bool {
        self.instruments.iter().any(|i| i == instrument)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teaches_matches_listed_instruments() {
        let teacher = Teacher {
            id: TeacherId::new(),
            name: "Ir. João Silva".to_string(),
            instruments: vec!["Violino".to_string(), "Viola".to_string()],
            role: StaffRole::Instructor,
        };
        assert!(teacher.teaches("Viola"));
        assert!(!teacher.teaches("Órgão"));
    }

    #[test]
    fn serializes_role_as_label() {
        let teacher = Teacher {
            id: TeacherId::new(),
            name: "Ir. Maria Santos".to_string(),
            instruments: vec!["Órgão".to_string()],
            role: StaffRole::OrchestraLead,
        };
        let json = serde_json::to_string(&teacher).unwrap();
        assert!(json.contains("\"Encarregado de Orquestra\""));
    }
}
