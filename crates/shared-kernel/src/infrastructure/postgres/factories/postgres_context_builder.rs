// crates/shared-kernel/src/infrastructure/postgres/factories/postgres_context_builder.rs

use std::str::FromStr;
use std::time::Duration;
use crate::errors::{AppError, AppResult};
use crate::infrastructure::postgres::factories::{PostgresConfig, PostgresContext};

pub struct PostgresContextBuilder {
    url: String,
    config: PostgresConfig,
}

impl PostgresContextBuilder {
    /// `{prefix}_URL` est obligatoire, le reste garde les valeurs par défaut
    pub fn new(prefix: &str) -> AppResult<Self> {
        let url_var = format!("{prefix}_URL");
        let url = std::env::var(&url_var).map_err(|_| AppError::missing_env(&url_var))?;

        // Une valeur illisible ou hors bornes est ignorée
        let mut config = PostgresConfig::default();
        if let Some(max) = read_env::<u32>(prefix, "MAX_CONNECTIONS") {
            config.max_connections = max;
        }
        if let Some(min) = read_env::<u32>(prefix, "MIN_CONNECTIONS") {
            config.min_connections = min;
        }
        if let Some(secs) = read_env::<u64>(prefix, "CONNECT_TIMEOUT") {
            config.connect_timeout = Duration::from_secs(secs);
        }

        Ok(Self { url, config })
    }

    pub async fn build(self) -> AppResult<PostgresContext> {
        PostgresContext::connect(&self.url, self.config).await
    }
}

fn read_env<T: FromStr>(prefix: &str, suffix: &str) -> Option<T> {
    std::env::var(format!("{prefix}_{suffix}"))
        .ok()
        .and_then(|v| v.trim().parse().ok())
}
