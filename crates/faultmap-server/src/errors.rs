use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use faultmap_core::{ErrorInfo, ServiceError, raw_language};
use faultmap_registry::RegistryHandle;
use http::HeaderMap;
use serde::Deserialize;

use crate::ApiError;

/// Routes for inspecting and exercising the registry
pub fn errors_router(registry: RegistryHandle) -> Router {
    Router::new()
        .route("/v1/errors/resolve", post(resolve_handler))
        .route("/v1/errors/{code}", get(preview_handler))
        .route("/v1/errors/{code}/raise", get(raise_handler))
        .with_state(registry)
}

/// Request body for explicit resolution
#[derive(Debug, Deserialize)]
pub struct ResolveBody {
    pub code: String,
    /// Raw language preference; the request's `Accept-Language` when absent
    #[serde(default)]
    pub language: Option<String>,
}

/// Handle `GET /v1/errors/{code}`
///
/// Returns what a raised error with this code would resolve to, with a
/// `200` status regardless of the resolved one.
async fn preview_handler(
    State(registry): State<RegistryHandle>,
    Path(code): Path<String>,
    headers: HeaderMap,
) -> Json<ErrorInfo> {
    Json(registry.resolve(&code, Some(raw_language(&headers))))
}

/// Handle `POST /v1/errors/resolve`
async fn resolve_handler(
    State(registry): State<RegistryHandle>,
    headers: HeaderMap,
    Json(body): Json<ResolveBody>,
) -> Json<ErrorInfo> {
    let language = body.language.as_deref().unwrap_or_else(|| raw_language(&headers));
    Json(registry.resolve(&body.code, Some(language)))
}

/// Handle `GET /v1/errors/{code}/raise`
///
/// Fails with the given code so the response travels the same path as a
/// real handler error.
async fn raise_handler(Path(code): Path<String>) -> Result<(), ApiError> {
    Err(ServiceError::coded_with_detail(code, "raised on request").into())
}
