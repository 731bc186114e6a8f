// crates/shared-kernel/src/infrastructure/postgres/factories/postgres_config.rs

use std::time::Duration;

/// Réglages de la pool ; l'URL n'y figure pas pour ne pas logger de secret
#[derive(Debug, Clone, PartialEq)]
pub struct PostgresConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 2,
            connect_timeout: Duration::from_secs(3),
        }
    }
}
