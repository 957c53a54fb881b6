use axum::Json;
use axum::response::{IntoResponse, Response};
use faultmap_core::{ErrorInfo, ServiceError, extract_code};

/// Resolved error as an HTTP response
///
/// The body is the flat `ErrorInfo` JSON and the transport status is the
/// resolved `status`.
#[derive(Debug, Clone)]
pub struct ErrorResponse(pub ErrorInfo);

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.0.status_code(), Json(self.0)).into_response()
    }
}

/// Marker left on a response whose error still needs resolving
#[derive(Debug, Clone)]
pub(crate) struct PendingError {
    pub code: String,
}

/// Error returned from handlers
///
/// Converts into a generic 500 response tagged with the extracted error
/// code. The error-resolution middleware swaps it for the localized
/// registry entry using the request's `Accept-Language`.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        Self(e)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self(ServiceError::Unclassified(e))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = extract_code(&self.0);

        match &self.0 {
            ServiceError::Unclassified(e) => tracing::error!(error = %format!("{e:#}"), "unclassified request failure"),
            other => tracing::debug!(%code, detail = ?other.detail(), "request failed"),
        }

        let mut response = ErrorResponse(ErrorInfo::generic()).into_response();
        response.extensions_mut().insert(PendingError { code });
        response
    }
}
