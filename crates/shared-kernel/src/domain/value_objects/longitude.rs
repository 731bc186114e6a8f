// crates/shared-kernel/src/domain/value_objects/longitude.rs

use crate::errors::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coordonnée transmise telle quelle au géocodeur : aucune vérification de plage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Longitude(f64);

impl Longitude {
    pub fn from_raw(val: f64) -> Self {
        Self(val)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl FromStr for Longitude {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<f64>()
            .map(Self)
            .map_err(|_| DomainError::Validation {
                field: "longitude",
                reason: format!("'{}' is not a number", s),
            })
    }
}

impl fmt::Display for Longitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
