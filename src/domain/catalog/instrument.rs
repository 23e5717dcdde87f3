//! Instrument entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{InstrumentFamily, InstrumentId};

/// An instrument taught at the school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    pub id: InstrumentId,
    pub name: String,
    pub family: InstrumentFamily,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_json() {
        let instrument = Instrument {
            id: InstrumentId::new(),
            name: "Violino".to_string(),
            family: InstrumentFamily::Cordas,
        };
        let json = serde_json::to_string(&instrument).unwrap();
        assert!(json.contains("\"Cordas\""));
        let back: Instrument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, instrument);
    }
}
