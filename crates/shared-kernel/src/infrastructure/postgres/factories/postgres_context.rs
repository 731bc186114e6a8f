// crates/shared-kernel/src/infrastructure/postgres/factories/postgres_context.rs

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::infrastructure::postgres::factories::{PostgresConfig, PostgresContextBuilder};

/// Pool connectée, construite une fois au démarrage
pub struct PostgresContext {
    pool: PgPool,
}

impl PostgresContext {
    /// Builder alimenté par `{prefix}_URL`, `{prefix}_MAX_CONNECTIONS`, ...
    pub fn builder(prefix: &str) -> AppResult<PostgresContextBuilder> {
        PostgresContextBuilder::new(prefix)
    }

    pub fn pool(&self) -> PgPool {
        self.pool.clone()
    }

    pub(crate) async fn connect(url: &str, config: PostgresConfig) -> AppResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout)
            .connect(url)
            .await
            .map_err(|e| {
                let message = format!("Postgres connection failed: {e}");
                AppError::new(ErrorCode::InfrastructureFailure, message)
            })?;

        tracing::info!(?config, "Postgres pool ready");
        Ok(Self { pool })
    }
}
