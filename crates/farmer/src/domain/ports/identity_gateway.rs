// crates/farmer/src/domain/ports/identity_gateway.rs

use async_trait::async_trait;
use shared_kernel::errors::Result;

use crate::domain::entities::IdentityRecord;
use crate::domain::value_objects::{BearerToken, FarmerId, PhoneNumber};

#[async_trait]
pub trait IdentityGateway: Send + Sync {
    /// Échoue avec `AlreadyExists` si le numéro est déjà enregistré,
    /// `Validation` si le fournisseur le juge mal formé.
    async fn create_identity(&self, phone_number: &PhoneNumber) -> Result<FarmerId>;

    async fn find_by_phone_number(
        &self,
        phone_number: &PhoneNumber,
    ) -> Result<Option<IdentityRecord>>;

    /// Jeton frais à chaque appel ; la durée de vie relève du fournisseur.
    async fn issue_token(&self, uid: &FarmerId) -> Result<BearerToken>;
}
