//! Request validation and the BMI computation itself.

use serde::{Deserialize, Serialize};

use crate::category::{Category, classify};
use crate::error::ValidationError;
use crate::gender::Gender;
use crate::weight::{WeightStatus, ideal_weight};

/// Input measurements for a single calculation.
///
/// `gender` and `age` are kept loose here so that out-of-range values are
/// reported by [`BmiRequest::validate`] rather than by deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiRequest {
    /// Weight in kilograms.
    pub weight: f64,
    /// Height in meters.
    pub height: f64,
    /// `"male"` or `"female"`.
    pub gender: String,
    /// Age in years. Validated but not used by the computation.
    pub age: i64,
}

impl BmiRequest {
    pub fn new(weight: f64, height: f64, gender: impl Into<String>, age: i64) -> Self {
        Self {
            weight,
            height,
            gender: gender.into(),
            age,
        }
    }

    /// Checks every input constraint and returns the parsed gender.
    ///
    /// Positivity is checked before gender.
    pub fn validate(&self) -> Result<Gender, ValidationError> {
        if !is_positive(self.height) || !is_positive(self.weight) || self.age <= 0 {
            return Err(ValidationError::NonPositiveInput);
        }
        self.gender.parse()
    }
}

/// Result of a BMI calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiResponse {
    /// BMI rounded to two decimals.
    pub bmi: f64,
    pub category: Category,
    pub advice: String,
    /// Ideal weight in kilograms, rounded to two decimals.
    pub ideal_weight: f64,
    pub weight_status: WeightStatus,
}

/// Computes BMI, category, advice, ideal weight and weight status.
///
/// Fails without computing anything if the request is invalid.
#[tracing::instrument(level = "debug")]
pub fn compute(request: &BmiRequest) -> Result<BmiResponse, ValidationError> {
    let gender = match request.validate() {
        Ok(gender) => gender,
        Err(err) => {
            metrics::counter!("bmi_validation_failures_total", "reason" => err.reason())
                .increment(1);
            return Err(err);
        }
    };

    let bmi = body_mass_index(request.weight, request.height);
    let (category, advice) = classify(bmi, gender);
    let ideal = ideal_weight(request.height, gender);
    // Status uses the unrounded ideal weight.
    let weight_status = WeightStatus::compare(request.weight, ideal);

    metrics::counter!("bmi_calculations_total", "category" => category.as_str()).increment(1);
    tracing::debug!(bmi, %category, %weight_status, "bmi computed");

    Ok(BmiResponse {
        bmi: round2(bmi),
        category,
        advice: advice.to_string(),
        ideal_weight: round2(ideal),
        weight_status,
    })
}

/// `weight / height²`, unrounded.
pub fn body_mass_index(weight: f64, height: f64) -> f64 {
    weight / (height * height)
}

/// Rounds to two decimal places.
///
/// Rounds the exact binary value, with ties going to even, so `7.675`
/// (stored as `7.67499...`) becomes `7.67` and `0.125` becomes `0.12`.
/// Scaling by 100 first would round twice and get both wrong.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
