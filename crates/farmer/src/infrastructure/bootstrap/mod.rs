mod api_config;
mod wiring;

pub use api_config::{ApiConfig, DB_ENV_PREFIX, DEFAULT_PORT};
pub use wiring::build_api_state;
