//! Instrument family enum - the five orchestral sections the school tracks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Orchestral family an instrument belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstrumentFamily {
    Cordas,
    Madeiras,
    Metais,
    Teclas,
    Outros,
}

impl InstrumentFamily {
    /// All families in display order.
    pub fn all() -> &'static [InstrumentFamily] {
        &[
            InstrumentFamily::Cordas,
            InstrumentFamily::Madeiras,
            InstrumentFamily::Metais,
            InstrumentFamily::Teclas,
            InstrumentFamily::Outros,
        ]
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            InstrumentFamily::Cordas => "Cordas",
            InstrumentFamily::Madeiras => "Madeiras",
            InstrumentFamily::Metais => "Metais",
            InstrumentFamily::Teclas => "Teclas",
            InstrumentFamily::Outros => "Outros",
        }
    }
}

impl fmt::Display for InstrumentFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
