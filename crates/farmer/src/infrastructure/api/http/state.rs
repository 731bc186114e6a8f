// crates/farmer/src/infrastructure/api/http/state.rs

use std::sync::Arc;
use axum::extract::FromRef;

use crate::infrastructure::api::http::handlers::{FarmHandler, FarmerHandler};

/// État partagé du routeur : uniquement des handlers immuables
#[derive(Clone)]
pub struct ApiState {
    pub farmer: Arc<FarmerHandler>,
    pub farm: Arc<FarmHandler>,
}

impl ApiState {
    pub fn new(farmer: FarmerHandler, farm: FarmHandler) -> Self {
        Self { farmer: Arc::new(farmer), farm: Arc::new(farm) }
    }
}

impl FromRef<ApiState> for Arc<FarmerHandler> {
    fn from_ref(state: &ApiState) -> Self {
        state.farmer.clone()
    }
}

impl FromRef<ApiState> for Arc<FarmHandler> {
    fn from_ref(state: &ApiState) -> Self {
        state.farm.clone()
    }
}
