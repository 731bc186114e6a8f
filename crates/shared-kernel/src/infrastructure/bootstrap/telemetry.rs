// crates/shared-kernel/src/infrastructure/bootstrap/telemetry.rs

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installe le subscriber global (`RUST_LOG`, `info` par défaut).
/// Sans effet si un subscriber est déjà installé (tests, second appel).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
