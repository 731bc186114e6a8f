// crates/farmer/src/domain/value_objects/phone_number.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};
use std::fmt;

/// Préfixe national ougandais (ex: 0712345678)
const LOCAL_TRUNK_PREFIX: &str = "07";
const COUNTRY_CALLING_CODE: &str = "+256";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Passe un numéro local au format international : "07..." devient "+2567...".
    /// Tout autre préfixe est supposé déjà international et reste inchangé.
    pub fn normalize(raw: &str) -> Self {
        if raw.starts_with(LOCAL_TRUNK_PREFIX) {
            // On ne retire que le "0" initial : "0712..." -> "+256" + "712..."
            return Self(format!("{COUNTRY_CALLING_CODE}{}", &raw[1..]));
        }
        Self(raw.to_string())
    }

    /// Lit puis normalise le champ `phoneNumber` d'un corps JSON
    pub fn normalize_value(value: Option<&Value>) -> Result<Self> {
        match value {
            Some(Value::String(raw)) => Ok(Self::normalize(raw)),
            _ => Err(DomainError::Validation {
                field: "phoneNumber",
                reason: "must be a string".into(),
            }),
        }
    }

    pub fn from_raw(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validation E.164 appliquée par le fournisseur d'identité, pas par les handlers.
impl ValueObject for PhoneNumber {
    fn validate(&self) -> Result<()> {
        let Some(digits) = self.0.strip_prefix('+') else {
            return Err(DomainError::Validation {
                field: "phone_number",
                reason: "must start with country code (+256, +33, etc.)".into(),
            });
        };

        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::Validation {
                field: "phone_number",
                reason: "must contain only digits after the country code".into(),
            });
        }

        if digits.len() < 10 || digits.len() > 15 {
            return Err(DomainError::Validation {
                field: "phone_number",
                reason: "must have 10 to 15 digits after country code".into(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
