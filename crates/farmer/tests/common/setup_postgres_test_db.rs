// crates/farmer/tests/common/setup_postgres_test_db.rs

use sqlx::PgPool;
use testcontainers::ContainerAsync;
use testcontainers_modules::postgres::Postgres as PostgresImage;
use farmer::infrastructure::postgres::utils::run_farmer_postgres_migrations;
use shared_kernel::infrastructure::postgres::utils::setup_test_postgres;

pub async fn setup_postgres_test_db() -> (PgPool, ContainerAsync<PostgresImage>) {
    let (pool, container) = setup_test_postgres().await;
    run_farmer_postgres_migrations(&pool)
        .await
        .expect("Farmer migrations failed");
    (pool, container)
}
