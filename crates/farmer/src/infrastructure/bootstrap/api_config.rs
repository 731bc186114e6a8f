// crates/farmer/src/infrastructure/bootstrap/api_config.rs

use shared_kernel::errors::{AppError, AppResult};

use crate::infrastructure::identity::DEFAULT_TOKEN_TTL_SECS;
use crate::infrastructure::nominatim::NominatimConfig;

pub const DEFAULT_PORT: u16 = 5000;

/// Préfixe des variables Postgres (`FARMER_DB_URL`, `FARMER_DB_MAX_CONNECTIONS`, ...)
pub const DB_ENV_PREFIX: &str = "FARMER_DB";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub nominatim: NominatimConfig,
    pub token_secret: String,
    pub token_ttl_secs: i64,
}

impl ApiConfig {
    pub fn from_env() -> AppResult<Self> {
        let port = parse_or("PORT", DEFAULT_PORT)?;
        let token_ttl_secs = parse_or("IDENTITY_TOKEN_TTL_SECS", DEFAULT_TOKEN_TTL_SECS)?;

        let token_secret = std::env::var("IDENTITY_TOKEN_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::missing_env("IDENTITY_TOKEN_SECRET"))?;

        Ok(Self {
            port,
            nominatim: NominatimConfig::from_env(),
            token_secret,
            token_ttl_secs,
        })
    }
}

// Absente : valeur par défaut. Présente mais illisible : erreur de configuration
fn parse_or<T: std::str::FromStr>(name: &str, default: T) -> AppResult<T> {
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| AppError::invalid_env(name, &raw)),
        Err(_) => Ok(default),
    }
}
