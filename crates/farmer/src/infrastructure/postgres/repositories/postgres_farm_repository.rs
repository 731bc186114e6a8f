// crates/farmer/src/infrastructure/postgres/repositories/postgres_farm_repository.rs

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::mappers::SqlxErrorExt;

use crate::domain::entities::FarmRecord;
use crate::domain::repositories::FarmRepository;
use crate::domain::value_objects::FarmerId;
use crate::infrastructure::postgres::rows::PostgresDocumentRow;

pub struct PostgresFarmRepository {
    pool: PgPool,
}

impl PostgresFarmRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FarmRepository for PostgresFarmRepository {
    async fn put(&self, farm: &FarmRecord) -> Result<()> {
        // Pas de clé étrangère vers `farmers` : la cohérence reste à la charge de l'appelant
        sqlx::query(
            r#"
            INSERT INTO farms (farmer_id, document, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (farmer_id) DO UPDATE
            SET document = EXCLUDED.document, updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(farm.farmer_id().as_str())
        .bind(Json(farm.document()))
        .execute(&self.pool)
        .await
        .map_domain_infra("Farm: put")?;

        Ok(())
    }

    async fn get(&self, farmer_id: &FarmerId) -> Result<Option<FarmRecord>> {
        let row: Option<PostgresDocumentRow> =
            sqlx::query_as("SELECT farmer_id, document FROM farms WHERE farmer_id = $1")
                .bind(farmer_id.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_domain_infra("Farm: get")?;

        row.map(FarmRecord::try_from).transpose()
    }
}
