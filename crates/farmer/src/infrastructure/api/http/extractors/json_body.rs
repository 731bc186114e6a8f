// crates/farmer/src/infrastructure/api/http/extractors/json_body.rs

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Value};

use crate::infrastructure::api::http::mappers::ApiError;

const INVALID_JSON: &str = "Invalid JSON body";

/// Corps de requête JSON tolérant.
///
/// Un corps vide ou sans `Content-Type: application/json` vaut `{}` : la
/// validation se fait ensuite dans le cas d'usage, qui répond par l'enveloppe
/// 500 de la route. Seul un JSON syntaxiquement invalide est rejeté (400).
#[derive(Debug, Clone, PartialEq)]
pub struct JsonBody(pub Value);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        parse_body(is_json, &bytes).map(Self).map_err(IntoResponse::into_response)
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}

fn parse_body(is_json: bool, bytes: &[u8]) -> Result<Value, ApiError> {
    if !is_json || bytes.is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    serde_json::from_slice(bytes).map_err(|e| {
        tracing::warn!(error = %e, "Rejected request body");
        ApiError::bad_request(INVALID_JSON, e.to_string())
    })
}
