use axum::Router;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use faultmap_core::{GENERIC_CODE, raw_language};
use faultmap_registry::RegistryHandle;

use crate::response::{ErrorResponse, PendingError};

/// Middleware that resolves errors raised by handlers
///
/// Reads the request's language preference up front, then replaces any
/// response produced from an [`crate::ApiError`] with the registry's
/// localized entry for its code.
pub async fn resolve_errors_middleware(registry: RegistryHandle, request: Request, next: Next) -> Response {
    let language = raw_language(request.headers()).to_owned();

    let mut response = next.run(request).await;

    let Some(pending) = response.extensions_mut().remove::<PendingError>() else {
        return response;
    };

    let info = registry.resolve(&pending.code, Some(&language));

    if info.is_generic() && pending.code != GENERIC_CODE {
        tracing::warn!(code = %pending.code, "error code resolved to generic error");
    }

    ErrorResponse(info).into_response()
}

/// Install error resolution on every route of `router`
///
/// For host services embedding faultmap in their own router.
pub fn with_error_resolution<S>(router: Router<S>, registry: RegistryHandle) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(axum::middleware::from_fn(move |req, next| {
        let registry = registry.clone();
        async move { resolve_errors_middleware(registry, req, next).await }
    }))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::routing::get;
    use faultmap_core::ServiceError;
    use faultmap_registry::{DefinitionStore, MessageCatalog, Resolver};
    use http::StatusCode;
    use http::header::ACCEPT_LANGUAGE;
    use serde_json::json;
    use tower::ServiceExt;

    use crate::ApiError;

    use super::*;

    fn registry() -> RegistryHandle {
        let store = DefinitionStore::from_yaml_str(
            "errors:\n  NOT_FOUND:\n    category: GENERAL\n    message: Resource not found\n    status: 404\n",
        )
        .unwrap();
        let catalog = MessageCatalog::new().with_language("hi", [("NOT_FOUND", "Sansaadhan nahin mila")]);
        RegistryHandle::new(Resolver::new(store, catalog))
    }

    fn app() -> Router {
        let router = Router::new()
            .route("/missing", get(|| async { Err::<(), ApiError>(ServiceError::coded("NOT_FOUND").into()) }))
            .route("/unknown", get(|| async { Err::<(), ApiError>(ServiceError::coded("NO_SUCH_CODE").into()) }))
            .route("/ok", get(|| async { "fine" }));
        with_error_resolution(router, registry())
    }

    async fn call(uri: &str, language: Option<&str>) -> (StatusCode, serde_json::Value) {
        let mut request = http::Request::builder().uri(uri);
        if let Some(language) = language {
            request = request.header(ACCEPT_LANGUAGE, language);
        }

        let response = app().oneshot(request.body(Body::empty()).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null))
    }

    #[tokio::test]
    async fn raised_error_is_resolved() {
        let (status, body) = call("/missing", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({"code": "NOT_FOUND", "category": "GENERAL", "message": "Resource not found", "status": 404})
        );
    }

    #[tokio::test]
    async fn raised_error_is_localized() {
        let (status, body) = call("/missing", Some("hi-IN, en;q=0.8")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Sansaadhan nahin mila");
    }

    #[tokio::test]
    async fn unknown_code_is_generic() {
        let (status, body) = call("/unknown", Some("hi")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "GENERIC_ERROR");
        assert_eq!(body["message"], "Something went wrong");
    }

    #[tokio::test]
    async fn successful_responses_pass_through() {
        let response = app()
            .oneshot(http::Request::builder().uri("/ok").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"fine");
    }
}
