// crates/farmer/src/domain/ports/district_resolver.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::{Latitude, Longitude};
use shared_kernel::errors::Result;

use crate::domain::value_objects::DistrictName;

#[async_trait]
pub trait DistrictResolver: Send + Sync {
    /// Géocodage inverse : city > town > village > "Unknown District".
    /// Une panne réseau remonte telle quelle (aucun retry).
    async fn resolve_district(
        &self,
        latitude: Latitude,
        longitude: Longitude,
    ) -> Result<DistrictName>;
}
