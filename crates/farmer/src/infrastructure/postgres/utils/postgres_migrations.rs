// crates/farmer/src/infrastructure/postgres/utils/postgres_migrations.rs

use sqlx::PgPool;
use shared_kernel::errors::AppResult;

/// Schéma embarqué dans le binaire, idempotent (IF NOT EXISTS)
pub async fn run_farmer_postgres_migrations(pool: &PgPool) -> AppResult<()> {
    let schema = include_str!("../../../../migrations/postgres/202601010000_farmer_registry.sql");

    // raw_sql accepte plusieurs instructions dans une même requête
    sqlx::raw_sql(schema).execute(pool).await?;

    tracing::info!("Farmer registry migrations applied");
    Ok(())
}
