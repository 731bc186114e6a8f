// crates/farmer/src/domain/repositories/farmer_repository.rs

use async_trait::async_trait;
use shared_kernel::errors::Result;

use crate::domain::entities::FarmerProfile;
use crate::domain::value_objects::FarmerId;

/// Collection `farmers`, clé = farmerID.
#[async_trait]
pub trait FarmerRepository: Send + Sync {
    /// Écrase intégralement le document existant (pas de fusion).
    async fn put(&self, profile: &FarmerProfile) -> Result<()>;

    async fn get(&self, farmer_id: &FarmerId) -> Result<Option<FarmerProfile>>;
}
