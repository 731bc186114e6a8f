// crates/farmer/src/domain/repositories/farm_repository.rs

use async_trait::async_trait;
use shared_kernel::errors::Result;

use crate::domain::entities::FarmRecord;
use crate::domain::value_objects::FarmerId;

/// Collection `farms`, clé = farmerID du propriétaire.
/// Une seconde inscription pour le même agriculteur remplace la première.
#[async_trait]
pub trait FarmRepository: Send + Sync {
    async fn put(&self, farm: &FarmRecord) -> Result<()>;
    async fn get(&self, farmer_id: &FarmerId) -> Result<Option<FarmRecord>>;
}
