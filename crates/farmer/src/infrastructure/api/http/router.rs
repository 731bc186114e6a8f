// crates/farmer/src/infrastructure/api/http/router.rs

use axum::middleware;
use axum::routing::post;
use axum::Router;
use shared_kernel::infrastructure::http::permissive_cors;

use crate::infrastructure::api::http::handlers::{
    authenticate_user, fetch_farm, register_farm, register_farmer,
};
use crate::infrastructure::api::http::ApiState;

pub const API_PREFIX: &str = "/api";

pub fn build_router(state: ApiState) -> Router {
    let api = Router::new()
        .route("/registerFarmer", post(register_farmer))
        .route("/registerFarm", post(register_farm))
        .route("/fetchFarm", post(fetch_farm))
        .route("/authenticateUser", post(authenticate_user));

    Router::new()
        .nest(API_PREFIX, api)
        .layer(middleware::from_fn(permissive_cors))
        .with_state(state)
}
