//! Staff role enum for teaching personnel.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role a staff member holds at the school.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffRole {
    #[default]
    #[serde(rename = "Instrutor")]
    Instructor,
    #[serde(rename = "Encarregado de Orquestra")]
    OrchestraLead,
    #[serde(rename = "Auxiliar")]
    Assistant,
}

impl StaffRole {
    /// All roles in display order.
    pub fn all() -> &'static [StaffRole] {
        &[
            StaffRole::Instructor,
            StaffRole::OrchestraLead,
            StaffRole::Assistant,
        ]
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            StaffRole::Instructor => "Instrutor",
            StaffRole::OrchestraLead => "Encarregado de Orquestra",
            StaffRole::Assistant => "Auxiliar",
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
