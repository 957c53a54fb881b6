use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use faultmap_config::RegistryConfig;
use faultmap_registry::RegistryHandle;
use http::{HeaderMap, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;

/// Header carrying the reload secret
pub const RELOAD_SECRET_HEADER: &str = "x-reload-secret";

/// Shared state for the registry reload endpoint
#[derive(Clone)]
pub struct ReloadState {
    pub registry: RegistryHandle,
    pub config: RegistryConfig,
    pub secret: SecretString,
}

/// Re-read definitions and messages, then publish them
///
/// Responds `204` once the new data is live. A rejected reload answers
/// `422` and the previous data keeps serving.
pub async fn reload_handler(State(state): State<ReloadState>, headers: HeaderMap) -> Response {
    let secret = headers.get(RELOAD_SECRET_HEADER).and_then(|v| v.to_str().ok());

    if secret != Some(state.secret.expose_secret()) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let ReloadState { registry, config, .. } = state;
    let outcome = tokio::task::spawn_blocking(move || registry.reload(&config)).await;

    match outcome {
        Ok(Ok(())) => StatusCode::NO_CONTENT.into_response(),
        Ok(Err(e)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "error": {
                    "type": "reload_rejected",
                    "message": e.to_string(),
                }
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "registry reload task failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
