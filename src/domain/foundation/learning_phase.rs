//! Learning phase enum - a student's stage in the instructional progression.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed progression stages used by the school.
///
/// Serializes as the display label, which is the form the records use at the
/// facade boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LearningPhase {
    #[default]
    #[serde(rename = "1ª Fase (Iniciante)")]
    Fase1,
    #[serde(rename = "2ª Fase")]
    Fase2,
    #[serde(rename = "3ª Fase")]
    Fase3,
    #[serde(rename = "4ª Fase")]
    Fase4,
    #[serde(rename = "RJM (Reunião de Jovens)")]
    Rjm,
    #[serde(rename = "Apto para Orquestra")]
    AptoOrquestra,
    #[serde(rename = "Oficializado")]
    Oficializado,
}

impl LearningPhase {
    /// All phases in progression order.
    pub fn all() -> &'static [LearningPhase] {
        &[
            LearningPhase::Fase1,
            LearningPhase::Fase2,
            LearningPhase::Fase3,
            LearningPhase::Fase4,
            LearningPhase::Rjm,
            LearningPhase::AptoOrquestra,
            LearningPhase::Oficializado,
        ]
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            LearningPhase::Fase1 => "1ª Fase (Iniciante)",
            LearningPhase::Fase2 => "2ª Fase",
            LearningPhase::Fase3 => "3ª Fase",
            LearningPhase::Fase4 => "4ª Fase",
            LearningPhase::Rjm => "RJM (Reunião de Jovens)",
            LearningPhase::AptoOrquestra => "Apto para Orquestra",
            LearningPhase::Oficializado => "Oficializado",
        }
    }
}

impl fmt::Display for LearningPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_seven_phases_in_order() {
        let phases = LearningPhase::all();
        assert_eq!(phases.len(), 7);
        assert_eq!(phases[0], LearningPhase::Fase1);
        assert_eq!(phases[6], LearningPhase::Oficializado);
    }

    #[test]
    fn label_matches_display() {
        for phase in LearningPhase::all() {
            assert_eq!(format!("{}", phase), phase.label());
        }
    }

    #[test]
    fn default_is_first_phase() {
        assert_eq!(LearningPhase::default(), LearningPhase::Fase1);
    }

    #[test]
    fn serializes_to_label_string() {
        let json = serde_json::to_string(&LearningPhase::Rjm).unwrap();
        assert_eq!(json, "\"RJM (Reunião de Jovens)\"");
    }

    #[test]
    fn deserializes_from_label_string() {
        let phase: LearningPhase = serde_json::from_str("\"3ª Fase\"").unwrap();
        assert_eq!(phase, LearningPhase::Fase3);
    }
}
