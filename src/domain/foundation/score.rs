//! Score value object for technical evaluations (0-10 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// An evaluation score between 0 and 10 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    /// The lowest possible score.
    pub const MIN: Self = Self(0);

    /// The highest possible score.
    pub const MAX: Self = Self(10);

    /// Creates a Score, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 10 {
            return Err(ValidationError::out_of_range("score", 0, 10, value as i32));
        }
        Ok(Self(value))
    }

    /// Creates a Score, clamping to the valid range.
    pub fn clamped(value: u8) -> Self {
        Self(value.min(10))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_try_new_accepts_valid_values() {
        assert_eq!(Score::try_new(0).unwrap().value(), 0);
        assert_eq!(Score::try_new(7).unwrap().value(), 7);
        assert_eq!(Score::try_new(10).unwrap().value(), 10);
    }

    #[test]
    fn score_try_new_rejects_over_ten() {
        let result = Score::try_new(11);
        assert!(result.is_err());
        match result {
            Err(ValidationError::OutOfRange {
                field,
                min,
                max,
                actual,
            }) => {
                assert_eq!(field, "score");
                assert_eq!(min, 0);
                assert_eq!(max, 10);
                assert_eq!(actual, 11);
            }
            _ => panic!("Expected OutOfRange error"),
        }
    }

    #[test]
    fn score_clamped_caps_at_ten() {
        assert_eq!(Score::clamped(255).value(), 10);
        assert_eq!(Score::clamped(10).value(), 10);
        assert_eq!(Score::clamped(3).value(), 3);
    }

    #[test]
    fn score_displays_plain_number() {
        assert_eq!(format!("{}", Score::try_new(8).unwrap()), "8");
        assert_eq!(format!("{}", Score::MIN), "0");
        assert_eq!(format!("{}", Score::MAX), "10");
    }

    #[test]
    fn score_ordering_works() {
        assert!(Score::try_new(3).unwrap() < Score::try_new(7).unwrap());
        assert!(Score::MAX > Score::MIN);
    }

    #[test]
    fn score_serializes_to_json_number() {
        let score = Score::try_new(9).unwrap();
        assert_eq!(serde_json::to_string(&score).unwrap(), "9");
    }

    #[test]
    fn score_deserializes_from_json_number() {
        let score: Score = serde_json::from_str("6").unwrap();
        assert_eq!(score.value(), 6);
    }
}
