// crates/farmer/src/infrastructure/api/http/handlers/farmer_handler.rs

use std::sync::Arc;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::application::authenticate_user::{
    AuthenticateUserCommand, AuthenticateUserUseCase, AuthenticatedUserResponse,
};
use crate::application::register_farmer::{RegisterFarmerCommand, RegisterFarmerUseCase};
use crate::domain::entities::FarmerProfile;
use crate::infrastructure::api::http::extractors::JsonBody;
use crate::infrastructure::api::http::mappers::{ApiError, ToHttpResponse};

const REGISTER_FAILED: &str = "Failed to register farmer";
const AUTHENTICATE_FAILED: &str = "Failed to authenticate user";
const USER_NOT_FOUND: &str = "User not found";

pub struct FarmerHandler {
    register_farmer: Arc<RegisterFarmerUseCase>,
    authenticate_user: Arc<AuthenticateUserUseCase>,
}

impl FarmerHandler {
    pub fn new(
        register_farmer: Arc<RegisterFarmerUseCase>,
        authenticate_user: Arc<AuthenticateUserUseCase>,
    ) -> Self {
        Self { register_farmer, authenticate_user }
    }

    pub async fn register(&self, body: Value) -> Result<Value, ApiError> {
        tracing::debug!(body = %body, "registerFarmer request");

        // Un corps mal formé est un échec d'inscription comme un autre (500)
        let command = RegisterFarmerCommand::try_from(body).or_failure(REGISTER_FAILED)?;

        let profile = self
            .register_farmer
            .execute(command)
            .await
            .or_failure(REGISTER_FAILED)?;

        Ok(Value::Object(profile.into_document()))
    }

    pub async fn authenticate(&self, body: Value) -> Result<AuthenticatedUserResponse, ApiError> {
        let command = AuthenticateUserCommand::try_from(body).or_failure(AUTHENTICATE_FAILED)?;

        self.authenticate_user
            .execute(command)
            .await
            .or_not_found::<FarmerProfile>(USER_NOT_FOUND, AUTHENTICATE_FAILED)
    }
}

/// POST /api/registerFarmer
pub async fn register_farmer(
    State(handler): State<Arc<FarmerHandler>>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let document = handler.register(body).await?;
    Ok((StatusCode::CREATED, Json(document)))
}

/// POST /api/authenticateUser
pub async fn authenticate_user(
    State(handler): State<Arc<FarmerHandler>>,
    JsonBody(body): JsonBody,
) -> Result<Json<AuthenticatedUserResponse>, ApiError> {
    let response = handler.authenticate(body).await?;
    Ok(Json(response))
}
