// crates/farmer/src/infrastructure/postgres/repositories/postgres_farmer_repository.rs

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::mappers::SqlxErrorExt;

use crate::domain::entities::FarmerProfile;
use crate::domain::repositories::FarmerRepository;
use crate::domain::value_objects::FarmerId;
use crate::infrastructure::postgres::rows::PostgresDocumentRow;

pub struct PostgresFarmerRepository {
    pool: PgPool,
}

impl PostgresFarmerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FarmerRepository for PostgresFarmerRepository {
    async fn put(&self, profile: &FarmerProfile) -> Result<()> {
        // Upsert : le document remplace entièrement le précédent
        sqlx::query(
            r#"
            INSERT INTO farmers (farmer_id, document, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (farmer_id) DO UPDATE
            SET document = EXCLUDED.document, updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(profile.farmer_id().as_str())
        .bind(Json(profile.document()))
        .execute(&self.pool)
        .await
        .map_domain_infra("FarmerProfile: put")?;

        Ok(())
    }

    async fn get(&self, farmer_id: &FarmerId) -> Result<Option<FarmerProfile>> {
        let row: Option<PostgresDocumentRow> =
            sqlx::query_as("SELECT farmer_id, document FROM farmers WHERE farmer_id = $1")
                .bind(farmer_id.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_domain_infra("FarmerProfile: get")?;

        row.map(FarmerProfile::try_from).transpose()
    }
}
