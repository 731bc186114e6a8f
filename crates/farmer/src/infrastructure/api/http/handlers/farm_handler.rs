// crates/farmer/src/infrastructure/api/http/handlers/farm_handler.rs

use std::sync::Arc;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::application::fetch_farm::{FetchFarmCommand, FetchFarmUseCase};
use crate::application::register_farm::{RegisterFarmCommand, RegisterFarmUseCase};
use crate::domain::entities::FarmRecord;
use crate::infrastructure::api::http::extractors::JsonBody;
use crate::infrastructure::api::http::mappers::{ApiError, ToHttpResponse};

const REGISTER_FAILED: &str = "Failed to register farm";
const FETCH_FAILED: &str = "Failed to fetch farm data";
const FARM_NOT_FOUND: &str = "Farm not found";

pub struct FarmHandler {
    register_farm: Arc<RegisterFarmUseCase>,
    fetch_farm: Arc<FetchFarmUseCase>,
}

impl FarmHandler {
    pub fn new(
        register_farm: Arc<RegisterFarmUseCase>,
        fetch_farm: Arc<FetchFarmUseCase>,
    ) -> Self {
        Self { register_farm, fetch_farm }
    }

    pub async fn register(&self, body: Value) -> Result<Value, ApiError> {
        let command = RegisterFarmCommand::try_from(body).or_failure(REGISTER_FAILED)?;

        let farm = self
            .register_farm
            .execute(command)
            .await
            .or_failure(REGISTER_FAILED)?;

        Ok(Value::Object(farm.into_document()))
    }

    pub async fn fetch(&self, body: Value) -> Result<Value, ApiError> {
        let command = FetchFarmCommand::try_from(body).or_failure(FETCH_FAILED)?;

        let farm = self
            .fetch_farm
            .execute(command)
            .await
            .or_not_found::<FarmRecord>(FARM_NOT_FOUND, FETCH_FAILED)?;

        Ok(Value::Object(farm.into_document()))
    }
}

/// POST /api/registerFarm
pub async fn register_farm(
    State(handler): State<Arc<FarmHandler>>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let document = handler.register(body).await?;
    Ok((StatusCode::CREATED, Json(document)))
}

/// POST /api/fetchFarm
pub async fn fetch_farm(
    State(handler): State<Arc<FarmHandler>>,
    JsonBody(body): JsonBody,
) -> Result<Json<Value>, ApiError> {
    let document = handler.fetch(body).await?;
    Ok(Json(document))
}
