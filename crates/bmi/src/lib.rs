//! Body Mass Index calculator.
//!
//! This crate provides the pure computational core of the service:
//! - Input validation for weight, height, gender and age
//! - BMI category lookup with gender-specific advice
//! - Ideal weight estimation using Broca's index
//! - Weight status relative to the ideal weight

pub mod calculator;
pub mod category;
pub mod error;
pub mod gender;
pub mod weight;

pub use calculator::{BmiRequest, BmiResponse, body_mass_index, compute, round2};
pub use category::{Category, classify};
pub use error::ValidationError;
pub use gender::Gender;
pub use weight::{WeightStatus, ideal_weight};
