// backend/services/farmer/api-server/src/main.rs

use std::net::SocketAddr;

use farmer::infrastructure::api::http::build_router;
use farmer::infrastructure::bootstrap::{build_api_state, ApiConfig, DB_ENV_PREFIX};
use farmer::infrastructure::postgres::utils::run_farmer_postgres_migrations;
use shared_kernel::infrastructure::bootstrap::init_tracing;
use shared_kernel::infrastructure::postgres::factories::PostgresContext;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = ApiConfig::from_env()?;

    run_server(SocketAddr::from(([0, 0, 0, 0], config.port))).await
}

pub async fn run_server(addr: SocketAddr) -> Result<(), Box<dyn std::error::Error>> {
    let config = ApiConfig::from_env()?;

    // --- 1. POSTGRES (documents + identités) ---
    let pg_ctx = PostgresContext::builder(DB_ENV_PREFIX)?.build().await?;
    run_farmer_postgres_migrations(&pg_ctx.pool()).await?;

    // --- 2. CÂBLAGE (collaborateurs -> use cases -> handlers) ---
    let state = build_api_state(pg_ctx.pool(), &config)?;
    let app = build_router(state);

    // --- 3. DÉMARRAGE DU SERVEUR HTTP ---
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Farmer API listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Farmer API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // Sans signal exploitable, on ne s'arrête jamais de nous-mêmes
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
