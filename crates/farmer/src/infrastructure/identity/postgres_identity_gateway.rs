// crates/farmer/src/infrastructure/identity/postgres_identity_gateway.rs

use std::sync::Arc;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;
use shared_kernel::clock::Clock;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::mappers::SqlxErrorExt;

use crate::domain::entities::IdentityRecord;
use crate::domain::ports::IdentityGateway;
use crate::domain::value_objects::{BearerToken, FarmerId, PhoneNumber};
use crate::infrastructure::identity::CustomTokenSigner;
use crate::infrastructure::postgres::rows::IdentityRow;

/// Fournisseur d'identité adossé à la table `identities` (numéro unique).
pub struct PostgresIdentityGateway {
    pool: PgPool,
    signer: CustomTokenSigner,
    clock: Arc<dyn Clock>,
}

impl PostgresIdentityGateway {
    pub fn new(pool: PgPool, signer: CustomTokenSigner, clock: Arc<dyn Clock>) -> Self {
        Self { pool, signer, clock }
    }
}

#[async_trait]
impl IdentityGateway for PostgresIdentityGateway {
    async fn create_identity(&self, phone_number: &PhoneNumber) -> Result<FarmerId> {
        // Le fournisseur n'accepte que le format E.164
        phone_number.validate()?;

        let uid = FarmerId::try_new(Uuid::now_v7().to_string())?;

        sqlx::query(
            "INSERT INTO identities (uid, phone_number, created_at) VALUES ($1, $2, $3)",
        )
        .bind(uid.as_str())
        .bind(phone_number.as_str())
        .bind(self.clock.now())
        .execute(&self.pool)
        .await
        .map_domain::<IdentityRecord>("phone_number", phone_number.as_str())?;

        Ok(uid)
    }

    async fn find_by_phone_number(
        &self,
        phone_number: &PhoneNumber,
    ) -> Result<Option<IdentityRecord>> {
        let row = sqlx::query_as::<_, IdentityRow>(
            "SELECT uid, phone_number, created_at FROM identities WHERE phone_number = $1",
        )
        .bind(phone_number.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_domain_infra("Identity: find_by_phone_number")?;

        row.map(IdentityRecord::try_from).transpose()
    }

    async fn issue_token(&self, uid: &FarmerId) -> Result<BearerToken> {
        self.signer.sign(uid)
    }
}
