// crates/farmer/src/application/register_farm/register_farm_use_case.rs

use std::sync::Arc;
use shared_kernel::errors::Result;

use crate::application::register_farm::RegisterFarmCommand;
use crate::domain::entities::FarmRecord;
use crate::domain::repositories::FarmRepository;

pub struct RegisterFarmUseCase {
    farm_repo: Arc<dyn FarmRepository>,
}

impl RegisterFarmUseCase {
    pub fn new(farm_repo: Arc<dyn FarmRepository>) -> Self {
        Self { farm_repo }
    }

    /// Pas de contrôle d'existence du profil : la clé est prise telle quelle.
    pub async fn execute(&self, cmd: RegisterFarmCommand) -> Result<FarmRecord> {
        tracing::info!(farmer_id = %cmd.farm.farmer_id(), "Registering farm");

        self.farm_repo.put(&cmd.farm).await?;

        Ok(cmd.farm)
    }
}
