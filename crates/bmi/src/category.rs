//! BMI categories and gender-specific advice.

use serde::{Deserialize, Serialize};

use crate::gender::Gender;

/// Coarse BMI classification bucket.
///
/// Ranges:
/// ```text
///        bmi < 18.5   Underweight
/// 18.5 <= bmi < 24.9  Normal weight
/// 24.9 <= bmi < 25    Obesity (no explicit branch, falls through)
/// 25   <= bmi < 29.9  Overweight
/// 29.9 <= bmi         Obesity
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    Overweight,
    Obesity,
}

impl Category {
    /// Classifies a raw (unrounded) BMI value.
    ///
    /// Values in `[24.9, 25.0)` and NaN land in `Obesity`.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Category::Underweight
        } else if (18.5..24.9).contains(&bmi) {
            Category::NormalWeight
        } else if (25.0..29.9).contains(&bmi) {
            Category::Overweight
        } else {
            Category::Obesity
        }
    }

    /// Returns the advice string for this category and gender.
    pub fn advice(&self, gender: Gender) -> &'static str {
        match (self, gender) {
            (Category::Underweight, Gender::Male) => {
                "Try to gain weight by consuming more nutritious food and exercising regularly."
            }
            (Category::Underweight, Gender::Female) => {
                "Consider consulting a healthcare provider to discuss weight gain strategies."
            }
            (Category::NormalWeight, Gender::Male) => {
                "Maintain your current lifestyle and diet to stay healthy."
            }
            (Category::NormalWeight, Gender::Female) => {
                "Keep up the good work! Focus on balanced nutrition and exercise."
            }
            (Category::Overweight, Gender::Male) => {
                "Consider increasing physical activity and monitoring your diet to lose weight."
            }
            (Category::Overweight, Gender::Female) => {
                "Focus on a balanced diet and regular exercise to manage your weight."
            }
            (Category::Obesity, Gender::Male) => {
                "Consult a healthcare provider for advice on managing obesity."
            }
            (Category::Obesity, Gender::Female) => {
                "Seek guidance from a healthcare provider to address weight-related health concerns."
            }
        }
    }

    /// Returns the display name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::NormalWeight => "Normal weight",
            Category::Overweight => "Overweight",
            Category::Obesity => "Obesity",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Looks up the category for `bmi` together with the advice for `gender`.
pub fn classify(bmi: f64, gender: Gender) -> (Category, &'static str) {
    let category = Category::from_bmi(bmi);
    (category, category.advice(gender))
}
