//! Ideal weight (Broca's index) and weight status.

use serde::{Deserialize, Serialize};

use crate::gender::Gender;

const MALE_BROCA_OFFSET: f64 = 100.0;
const FEMALE_BROCA_OFFSET: f64 = 104.0;

/// Estimates ideal weight in kilograms from height in meters.
///
/// Uses `height_cm - 100` for men and `height_cm - 104` for women,
/// clamped so the result is never negative.
pub fn ideal_weight(height: f64, gender: Gender) -> f64 {
    let height_cm = height * 100.0;
    let offset = match gender {
        Gender::Male => MALE_BROCA_OFFSET,
        Gender::Female => FEMALE_BROCA_OFFSET,
    };
    (height_cm - offset).max(0.0)
}

/// Actual weight compared to the ideal weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightStatus {
    #[serde(rename = "Below ideal weight")]
    Below,
    #[serde(rename = "At ideal weight")]
    At,
    #[serde(rename = "Above ideal weight")]
    Above,
}

impl WeightStatus {
    /// Compares `weight` against `ideal` with exact float comparison.
    ///
    /// Anything that is neither below nor equal is `Above`.
    pub fn compare(weight: f64, ideal: f64) -> Self {
        if weight < ideal {
            WeightStatus::Below
        } else if weight == ideal {
            WeightStatus::At
        } else {
            WeightStatus::Above
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeightStatus::Below => "Below ideal weight",
            WeightStatus::At => "At ideal weight",
            WeightStatus::Above => "Above ideal weight",
        }
    }
}

impl std::fmt::Display for WeightStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broca_offsets() {
        assert_eq!(ideal_weight(1.75, Gender::Male), 75.0);
        assert_eq!(ideal_weight(1.75, Gender::Female), 71.0);
    }

    #[test]
    fn test_ideal_weight_clamped_at_zero() {
        assert_eq!(ideal_weight(0.5, Gender::Male), 0.0);
        assert_eq!(ideal_weight(1.02, Gender::Female), 0.0);
        assert_eq!(ideal_weight(1.0, Gender::Male), 0.0);
    }

    #[test]
    fn test_ideal_weight_never_negative() {
        let mut height = 0.01;
        while height < 3.0 {
            assert!(ideal_weight(height, Gender::Male) >= 0.0);
            assert!(ideal_weight(height, Gender::Female) >= 0.0);
            height += 0.01;
        }
    }

    #[test]
    fn test_compare_trichotomy() {
        assert_eq!(WeightStatus::compare(70.0, 75.0), WeightStatus::Below);
        assert_eq!(WeightStatus::compare(75.0, 75.0), WeightStatus::At);
        assert_eq!(WeightStatus::compare(80.0, 75.0), WeightStatus::Above);
    }

    #[test]
    fn test_compare_is_exact() {
        assert_eq!(WeightStatus::compare(75.000001, 75.0), WeightStatus::Above);
        assert_eq!(WeightStatus::compare(74.999999, 75.0), WeightStatus::Below);
    }

    #[test]
    fn test_serializes_to_display_name() {
        let json = serde_json::to_string(&WeightStatus::Below).unwrap();
        assert_eq!(json, "\"Below ideal weight\"");
        assert_eq!(WeightStatus::At.to_string(), "At ideal weight");
    }
}
