// crates/farmer/src/domain/entities/farmer_profile.rs

use serde_json::{Map, Value};
use shared_kernel::domain::entities::EntityMetadata;

use crate::domain::value_objects::{DistrictName, FarmerId, PhoneNumber};

pub const FARMER_ROLE_NAME: &str = "farmer";
pub const FARMER_ROLE_ID: i64 = 6;

/// Document `farmers/{farmerID}` : champs libres du client + champs calculés.
#[derive(Debug, Clone, PartialEq)]
pub struct FarmerProfile {
    farmer_id: FarmerId,
    document: Map<String, Value>,
}

impl FarmerProfile {
    /// Assemble le document d'inscription. Les champs calculés sont appliqués
    /// en dernier et écrasent toujours les valeurs homonymes envoyées par le client.
    pub fn register(
        payload: Map<String, Value>,
        phone_number: &PhoneNumber,
        farmer_id: FarmerId,
        district_name: &DistrictName,
    ) -> Self {
        let mut document = payload;

        document.insert("phoneNumber".into(), Value::from(phone_number.as_str()));
        document.insert("farmerID".into(), Value::from(farmer_id.as_str()));
        document.insert("role_name".into(), Value::from(FARMER_ROLE_NAME));
        document.insert("role_id".into(), Value::from(FARMER_ROLE_ID));
        document.insert("district_name".into(), Value::from(district_name.as_str()));

        Self { farmer_id, document }
    }

    /// Reconstruction depuis le stockage (aucune transformation)
    pub fn restore(farmer_id: FarmerId, document: Map<String, Value>) -> Self {
        Self { farmer_id, document }
    }

    pub fn farmer_id(&self) -> &FarmerId {
        &self.farmer_id
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.document.get(key)
    }

    pub fn document(&self) -> &Map<String, Value> {
        &self.document
    }

    pub fn into_document(self) -> Map<String, Value> {
        self.document
    }
}

impl EntityMetadata for FarmerProfile {
    fn entity_name() -> &'static str {
        "FarmerProfile"
    }
}
