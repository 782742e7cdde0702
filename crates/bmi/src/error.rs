//! Validation error types.

use thiserror::Error;

/// Errors raised when a BMI request fails input validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Weight, height or age is zero, negative or not finite.
    #[error("Height, weight, and age must be positive values.")]
    NonPositiveInput,

    /// Gender is neither `"male"` nor `"female"`.
    #[error("Gender must be 'male' or 'female'.")]
    InvalidGender,
}

impl ValidationError {
    /// Returns a short machine-readable label, used for metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::NonPositiveInput => "non_positive_input",
            ValidationError::InvalidGender => "invalid_gender",
        }
    }
}
