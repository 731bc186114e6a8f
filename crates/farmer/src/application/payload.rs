// crates/farmer/src/application/payload.rs

use serde_json::{Map, Value};
use shared_kernel::domain::value_objects::{Latitude, Longitude};
use shared_kernel::errors::{DomainError, Result};

/// Les corps de requête sont des objets JSON libres
pub(crate) fn into_object(body: Value) -> Result<Map<String, Value>> {
    match body {
        Value::Object(map) => Ok(map),
        _ => Err(DomainError::Validation {
            field: "body",
            reason: "must be a JSON object".into(),
        }),
    }
}

pub(crate) fn latitude_from(value: Option<&Value>) -> Result<Latitude> {
    match value {
        Some(Value::Number(n)) => n
            .as_f64()
            .map(Latitude::from_raw)
            .ok_or_else(|| not_a_number("latitude")),
        Some(Value::String(s)) => s.parse(),
        _ => Err(not_a_number("latitude")),
    }
}

pub(crate) fn longitude_from(value: Option<&Value>) -> Result<Longitude> {
    match value {
        Some(Value::Number(n)) => n
            .as_f64()
            .map(Longitude::from_raw)
            .ok_or_else(|| not_a_number("longitude")),
        Some(Value::String(s)) => s.parse(),
        _ => Err(not_a_number("longitude")),
    }
}

fn not_a_number(field: &'static str) -> DomainError {
    DomainError::Validation {
        field,
        reason: "must be a number".into(),
    }
}
