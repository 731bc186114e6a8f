// crates/farmer/src/application/fetch_farm/fetch_farm_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::errors::Result;

use crate::application::fetch_farm::FetchFarmCommand;
use crate::domain::entities::FarmRecord;
use crate::domain::repositories::FarmRepository;

pub struct FetchFarmUseCase {
    farm_repo: Arc<dyn FarmRepository>,
}

impl FetchFarmUseCase {
    pub fn new(farm_repo: Arc<dyn FarmRepository>) -> Self {
        Self { farm_repo }
    }

    pub async fn execute(&self, cmd: FetchFarmCommand) -> Result<FarmRecord> {
        tracing::info!(farmer_id = %cmd.farmer_id, "Fetching farm");

        let found = self.farm_repo.get(&cmd.farmer_id).await?;
        match &found {
            Some(farm) => tracing::debug!(document = ?farm.document(), "Farm retrieved"),
            None => tracing::info!(farmer_id = %cmd.farmer_id, "Farm not found"),
        }

        found.ok_or_not_found(&cmd.farmer_id)
    }
}
