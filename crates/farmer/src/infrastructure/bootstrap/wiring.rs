// crates/farmer/src/infrastructure/bootstrap/wiring.rs

use std::sync::Arc;
use sqlx::PgPool;
use shared_kernel::clock::{Clock, SystemClock};
use shared_kernel::errors::AppResult;

use crate::application::authenticate_user::AuthenticateUserUseCase;
use crate::application::fetch_farm::FetchFarmUseCase;
use crate::application::register_farm::RegisterFarmUseCase;
use crate::application::register_farmer::RegisterFarmerUseCase;
use crate::infrastructure::api::http::handlers::{FarmHandler, FarmerHandler};
use crate::infrastructure::api::http::ApiState;
use crate::infrastructure::bootstrap::ApiConfig;
use crate::infrastructure::identity::{CustomTokenSigner, PostgresIdentityGateway};
use crate::infrastructure::nominatim::NominatimClient;
use crate::infrastructure::postgres::repositories::{
    PostgresFarmRepository, PostgresFarmerRepository,
};

/// Assemble collaborateurs, use cases et handlers autour d'une pool déjà migrée
pub fn build_api_state(pool: PgPool, config: &ApiConfig) -> AppResult<ApiState> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    // --- 1. COLLABORATEURS (Infrastructure) ---
    let district_resolver = Arc::new(NominatimClient::new(&config.nominatim)?);
    let signer = CustomTokenSigner::new(
        config.token_secret.as_bytes().to_vec(),
        config.token_ttl_secs,
        clock.clone(),
    );
    let identity_gateway = Arc::new(PostgresIdentityGateway::new(pool.clone(), signer, clock));
    let farmer_repo = Arc::new(PostgresFarmerRepository::new(pool.clone()));
    let farm_repo = Arc::new(PostgresFarmRepository::new(pool));

    // --- 2. USE CASES (Application) ---
    let register_farmer = Arc::new(RegisterFarmerUseCase::new(
        district_resolver,
        identity_gateway.clone(),
        farmer_repo.clone(),
    ));
    let authenticate_user = Arc::new(AuthenticateUserUseCase::new(identity_gateway, farmer_repo));
    let register_farm = Arc::new(RegisterFarmUseCase::new(farm_repo.clone()));
    let fetch_farm = Arc::new(FetchFarmUseCase::new(farm_repo));

    // --- 3. HANDLERS (API) ---
    Ok(ApiState::new(
        FarmerHandler::new(register_farmer, authenticate_user),
        FarmHandler::new(register_farm, fetch_farm),
    ))
}
