use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::FarmRecord;
use crate::domain::repositories::FarmRepository;
use crate::domain::value_objects::FarmerId;

#[derive(Default)]
pub struct FarmRepositoryStub {
    pub farms: Arc<Mutex<HashMap<FarmerId, FarmRecord>>>,
    pub error_to_return: Arc<Mutex<Option<DomainError>>>,
}

impl FarmRepositoryStub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_farm(&self, farm: FarmRecord) {
        self.farms.lock().unwrap().insert(farm.farmer_id().clone(), farm);
    }

    pub fn fail_with(&self, err: DomainError) {
        *self.error_to_return.lock().unwrap() = Some(err);
    }

    fn check_error(&self) -> Result<()> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(())
    }
}

#[async_trait]
impl FarmRepository for FarmRepositoryStub {
    async fn put(&self, farm: &FarmRecord) -> Result<()> {
        self.check_error()?;
        self.farms.lock().unwrap().insert(farm.farmer_id().clone(), farm.clone());
        Ok(())
    }

    async fn get(&self, farmer_id: &FarmerId) -> Result<Option<FarmRecord>> {
        self.check_error()?;
        Ok(self.farms.lock().unwrap().get(farmer_id).cloned())
    }
}
