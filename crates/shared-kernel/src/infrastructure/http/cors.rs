// crates/shared-kernel/src/infrastructure/http/cors.rs

use axum::body::Body;
use axum::http::{HeaderValue, Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

const ALLOWED_METHODS: &str = "GET,HEAD,PUT,PATCH,POST,DELETE";

/// Middleware CORS ouvert à toutes les origines (clients mobiles et web).
/// À brancher via `axum::middleware::from_fn(permissive_cors)`.
pub async fn permissive_cors(req: Request<Body>, next: Next) -> Response {
    // 1. Pré-vol : on répond directement sans toucher aux handlers
    if req.method() == Method::OPTIONS {
        let requested_headers = req.headers().get("access-control-request-headers").cloned();
        let mut resp = StatusCode::NO_CONTENT.into_response();
        let headers = resp.headers_mut();
        headers.insert("access-control-allow-origin", HeaderValue::from_static("*"));
        headers.insert("access-control-allow-methods", HeaderValue::from_static(ALLOWED_METHODS));
        if let Some(value) = requested_headers {
            headers.insert("access-control-allow-headers", value);
            headers.insert("vary", HeaderValue::from_static("Access-Control-Request-Headers"));
        }
        return resp;
    }

    // 2. Requête simple : on ajoute l'origine autorisée à la réponse
    let mut resp = next.run(req).await;
    resp.headers_mut()
        .insert("access-control-allow-origin", HeaderValue::from_static("*"));
    resp
}
