// crates/farmer/src/domain/entities/farm_record.rs

use serde_json::{Map, Value};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::errors::Result;

use crate::domain::value_objects::FarmerId;

/// Document `farms/{farmerID}` : une exploitation par agriculteur, stockée telle quelle.
#[derive(Debug, Clone, PartialEq)]
pub struct FarmRecord {
    farmer_id: FarmerId,
    document: Map<String, Value>,
}

impl FarmRecord {
    /// La clé de stockage est lue dans le corps lui-même (`farmerID`)
    pub fn from_payload(payload: Map<String, Value>) -> Result<Self> {
        let farmer_id = FarmerId::try_from_value(payload.get("farmerID"))?;
        Ok(Self { farmer_id, document: payload })
    }

    pub fn restore(farmer_id: FarmerId, document: Map<String, Value>) -> Self {
        Self { farmer_id, document }
    }

    pub fn farmer_id(&self) -> &FarmerId {
        &self.farmer_id
    }

    pub fn document(&self) -> &Map<String, Value> {
        &self.document
    }

    pub fn into_document(self) -> Map<String, Value> {
        self.document
    }
}

impl EntityMetadata for FarmRecord {
    fn entity_name() -> &'static str {
        "Farm"
    }
}
