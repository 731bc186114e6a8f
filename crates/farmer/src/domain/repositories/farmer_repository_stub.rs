use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::FarmerProfile;
use crate::domain::repositories::FarmerRepository;
use crate::domain::value_objects::FarmerId;

#[derive(Default)]
pub struct FarmerRepositoryStub {
    /// Stockage en mémoire : FarmerId -> FarmerProfile
    pub profiles: Arc<Mutex<HashMap<FarmerId, FarmerProfile>>>,
    /// Simulation d'erreur forcée
    pub error_to_return: Arc<Mutex<Option<DomainError>>>,
}

impl FarmerRepositoryStub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Helper pour injecter un profil avant un test
    pub fn add_profile(&self, profile: FarmerProfile) {
        self.profiles.lock().unwrap().insert(profile.farmer_id().clone(), profile);
    }

    pub fn fail_with(&self, err: DomainError) {
        *self.error_to_return.lock().unwrap() = Some(err);
    }

    pub fn stored(&self, farmer_id: &str) -> Option<FarmerProfile> {
        self.profiles
            .lock()
            .unwrap()
            .values()
            .find(|p| p.farmer_id().as_str() == farmer_id)
            .cloned()
    }

    fn check_error(&self) -> Result<()> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(())
    }
}

#[async_trait]
impl FarmerRepository for FarmerRepositoryStub {
    async fn put(&self, profile: &FarmerProfile) -> Result<()> {
        self.check_error()?;
        self.profiles.lock().unwrap().insert(profile.farmer_id().clone(), profile.clone());
        Ok(())
    }

    async fn get(&self, farmer_id: &FarmerId) -> Result<Option<FarmerProfile>> {
        self.check_error()?;
        Ok(self.profiles.lock().unwrap().get(farmer_id).cloned())
    }
}
