// crates/farmer/src/application/register_farm/register_farm_command.rs

use serde_json::Value;
use shared_kernel::errors::{DomainError, Result};

use crate::application::payload::into_object;
use crate::domain::entities::FarmRecord;

#[derive(Debug, Clone)]
pub struct RegisterFarmCommand {
    pub farm: FarmRecord,
}

impl TryFrom<Value> for RegisterFarmCommand {
    type Error = DomainError;

    fn try_from(body: Value) -> Result<Self> {
        let farm = FarmRecord::from_payload(into_object(body)?)?;
        Ok(Self { farm })
    }
}
