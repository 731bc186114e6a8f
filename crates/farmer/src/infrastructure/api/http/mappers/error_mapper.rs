// crates/farmer/src/infrastructure/api/http/mappers/error_mapper.rs

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::errors::DomainError;

/// Enveloppe d'erreur JSON renvoyée par toutes les routes
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    status: StatusCode,
    body: Value,
}

impl ApiError {
    /// 500 `{error, details}` : `details` porte le message brut de l'erreur
    pub fn failure(message: &str, err: &DomainError) -> Self {
        tracing::error!(error = %err, "{message}");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: json!({ "error": message, "details": err.to_string() }),
        }
    }

    /// 400 `{error, details}` : corps JSON illisible, aucun cas d'usage n'est appelé
    pub fn bad_request(message: &str, details: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: json!({ "error": message, "details": details.into() }),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: json!({ "error": message }),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

pub trait ToHttpResponse<T> {
    /// Toute erreur devient un 500
    fn or_failure(self, message: &str) -> Result<T, ApiError>;

    /// Seul un NotFound sur l'entité `E` devient un 404 ; le reste est un 500
    fn or_not_found<E: EntityMetadata>(
        self,
        not_found: &str,
        failure: &str,
    ) -> Result<T, ApiError>;
}

impl<T> ToHttpResponse<T> for shared_kernel::errors::Result<T> {
    fn or_failure(self, message: &str) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::failure(message, &e))
    }

    fn or_not_found<E: EntityMetadata>(
        self,
        not_found: &str,
        failure: &str,
    ) -> Result<T, ApiError> {
        self.map_err(|e| {
            if e.is_not_found_for(E::entity_name()) {
                ApiError::not_found(not_found)
            } else {
                ApiError::failure(failure, &e)
            }
        })
    }
}
