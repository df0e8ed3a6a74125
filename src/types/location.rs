// ABOUTME: Validated location code for multi-location fleets.
// ABOUTME: A location is a region/placement name like "us-west-2" or a custom location.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocationCodeError {
    #[error("location code cannot be empty")]
    Empty,

    #[error("invalid character in location code: '{0}'")]
    InvalidChar(char),
}

/// A deployment location within a fleet.
///
/// Home region codes (`us-west-2`) and custom locations
/// (`custom-anywhere-1`) are both allowed. Ordered so pending-location
/// sets iterate deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct LocationCode(String);

impl LocationCode {
    pub fn new(value: &str) -> Result<Self, LocationCodeError> {
        if value.is_empty() {
            return Err(LocationCodeError::Empty);
        }

        for c in value.chars() {
            if !c.is_ascii_alphanumeric() && c != '-' {
                return Err(LocationCodeError::InvalidChar(c));
            }
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for LocationCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        LocationCode::new(&value).map_err(serde::de::Error::custom)
    }
}
