use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Code returned when nothing more specific can be resolved
pub const GENERIC_CODE: &str = "GENERIC_ERROR";

/// Category of the generic error
pub const GENERIC_CATEGORY: &str = "GENERAL";

/// Message of the generic error
pub const GENERIC_MESSAGE: &str = "Something went wrong";

/// Status of the generic error
pub const GENERIC_STATUS: u16 = 500;

/// Resolved, client-safe error description
///
/// Produced fresh by every resolution and serialized as-is into response
/// bodies. `status` doubles as the transport-level status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable error code (e.g. `VALIDATION_FAILED`)
    pub code: String,
    /// Coarse classification (e.g. `GENERAL`)
    pub category: String,
    /// Final, localized message
    pub message: String,
    /// HTTP status code
    #[serde(default = "default_status")]
    pub status: u16,
}

impl ErrorInfo {
    pub fn new(
        code: impl Into<String>,
        category: impl Into<String>,
        message: impl Into<String>,
        status: u16,
    ) -> Self {
        Self {
            code: code.into(),
            category: category.into(),
            message: message.into(),
            status,
        }
    }

    /// The hard-coded fallback used when no better information is resolvable
    pub fn generic() -> Self {
        Self::new(GENERIC_CODE, GENERIC_CATEGORY, GENERIC_MESSAGE, GENERIC_STATUS)
    }

    /// Whether this is exactly the generic fallback
    pub fn is_generic(&self) -> bool {
        *self == Self::generic()
    }

    /// Transport status, falling back to 500 for values outside the HTTP range
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl Default for ErrorInfo {
    fn default() -> Self {
        Self::generic()
    }
}

const fn default_status() -> u16 {
    400
}
