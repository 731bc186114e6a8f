// crates/farmer/src/application/register_farmer/register_farmer_command.rs

use serde_json::{Map, Value};
use shared_kernel::domain::value_objects::{Latitude, Longitude};
use shared_kernel::errors::{DomainError, Result};

use crate::application::payload::{into_object, latitude_from, longitude_from};
use crate::domain::value_objects::PhoneNumber;

#[derive(Debug, Clone)]
pub struct RegisterFarmerCommand {
    /// Corps complet du client, fusionné tel quel dans le profil
    pub payload: Map<String, Value>,
    pub phone_number: PhoneNumber,
    pub latitude: Latitude,
    pub longitude: Longitude,
}

impl TryFrom<Value> for RegisterFarmerCommand {
    type Error = DomainError;

    fn try_from(body: Value) -> Result<Self> {
        let payload = into_object(body)?;

        // Le numéro est normalisé avant toute autre lecture
        let phone_number = PhoneNumber::normalize_value(payload.get("phoneNumber"))?;
        let latitude = latitude_from(payload.get("latitude"))?;
        let longitude = longitude_from(payload.get("longitude"))?;

        Ok(Self { payload, phone_number, latitude, longitude })
    }
}
