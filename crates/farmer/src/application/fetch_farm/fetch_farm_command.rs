// crates/farmer/src/application/fetch_farm/fetch_farm_command.rs

use serde_json::Value;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::value_objects::FarmerId;

#[derive(Debug, Clone)]
pub struct FetchFarmCommand {
    pub farmer_id: FarmerId,
}

impl TryFrom<Value> for FetchFarmCommand {
    type Error = DomainError;

    fn try_from(body: Value) -> Result<Self> {
        let farmer_id = FarmerId::try_from_value(body.get("farmerID"))?;
        Ok(Self { farmer_id })
    }
}
