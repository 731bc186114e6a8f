// crates/farmer/src/application/authenticate_user/authenticate_user_response.rs

use serde::Serialize;
use serde_json::Value;

use crate::domain::entities::FarmerProfile;
use crate::domain::value_objects::BearerToken;

/// Session renvoyée au client mobile. L'ordre des champs est celui du contrat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthenticatedUserResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    pub avatar: Value,
    pub remember_token: String,
    pub created_at: Value,
    pub updated_at: Value,
    pub district_id: Value,
    pub district_name: Value,
    pub sex: Value,
    pub role_id: Value,
    pub role_name: Value,
}

impl AuthenticatedUserResponse {
    pub fn from_profile(profile: &FarmerProfile, token: BearerToken) -> Self {
        let copied = |key: &str| profile.field(key).cloned();
        let or_empty = |key: &str| truthy_or_empty(profile.field(key));

        Self {
            id: copied("farmerID"),
            username: copied("name"),
            phone_number: copied("phoneNumber"),
            name: copied("name"),
            avatar: or_empty("avatar"),
            remember_token: token.into_inner(),
            created_at: or_empty("created_at"),
            updated_at: or_empty("updated_at"),
            district_id: or_empty("district_id"),
            district_name: or_empty("district_name"),
            sex: or_empty("gender"),
            role_id: or_empty("role_id"),
            role_name: or_empty("role_name"),
        }
    }
}

/// Absent, null, false, 0 et "" deviennent "" ; toute autre valeur est gardée.
fn truthy_or_empty(value: Option<&Value>) -> Value {
    let is_falsy = match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => false,
    };

    match value {
        Some(v) if !is_falsy => v.clone(),
        _ => Value::String(String::new()),
    }
}
