// crates/farmer/src/domain/value_objects/farmer_id.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_kernel::errors::{DomainError, Result};
use std::fmt;

/// Identifiant opaque attribué par le fournisseur d'identité (uid).
/// Sert aussi de clé aux documents `farmers` et `farms`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FarmerId(String);

impl FarmerId {
    pub fn try_new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::Validation {
                field: "farmerID",
                reason: "must be a non-empty string".into(),
            });
        }
        Ok(Self(id))
    }

    /// Lecture du champ `farmerID` d'un corps JSON : seule une chaîne est acceptée
    pub fn try_from_value(value: Option<&Value>) -> Result<Self> {
        match value {
            Some(Value::String(id)) => Self::try_new(id.as_str()),
            _ => Err(DomainError::Validation {
                field: "farmerID",
                reason: "must be a non-empty string".into(),
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FarmerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
