//! Gender value object.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Gender used to select advice and the Broca offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Returns the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    /// Parses the exact lowercase wire strings; anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(ValidationError::InvalidGender),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_values() {
        assert_eq!("male".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!("female".parse::<Gender>(), Ok(Gender::Female));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!("Male".parse::<Gender>(), Err(ValidationError::InvalidGender));
        assert_eq!("FEMALE".parse::<Gender>(), Err(ValidationError::InvalidGender));
        assert_eq!("other".parse::<Gender>(), Err(ValidationError::InvalidGender));
        assert_eq!("".parse::<Gender>(), Err(ValidationError::InvalidGender));
    }

    #[test]
    fn test_display_matches_wire_form() {
        assert_eq!(Gender::Male.to_string(), "male");
        assert_eq!(Gender::Female.to_string(), "female");
    }
}
