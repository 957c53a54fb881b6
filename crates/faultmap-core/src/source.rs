use serde_json::Value;
use thiserror::Error;

use crate::info::GENERIC_CODE;

/// Capability of a raised error to identify itself to the registry
///
/// Implemented by any error type that can be resolved into an `ErrorInfo`.
/// Both methods default to "absent", so an implementor only exposes what it
/// actually carries.
pub trait ErrorSource {
    /// Explicit registry code, if the error carries one
    fn error_code(&self) -> Option<&str> {
        None
    }

    /// Positional arguments the error was raised with
    fn args(&self) -> &[Value] {
        &[]
    }
}

/// Derive the registry code for a raised error
///
/// Prefers a non-empty explicit code, then a first positional argument that
/// is a non-empty string (trimmed). Numbers, objects and other values are
/// never taken as codes. Falls back to `GENERIC_ERROR`.
pub fn extract_code(error: &(impl ErrorSource + ?Sized)) -> String {
    if let Some(code) = error.error_code()
        && !code.is_empty()
    {
        return code.to_owned();
    }

    if let Some(Value::String(first)) = error.args().first() {
        let first = first.trim();
        if !first.is_empty() {
            return first.to_owned();
        }
    }

    GENERIC_CODE.to_owned()
}

/// Error raised by request-handling code
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Error carrying an explicit registry code
    #[error("{code}")]
    Coded {
        code: String,
        /// Internal detail for logs, never shown to clients
        detail: Option<String>,
    },

    /// Error raised with positional arguments, the first possibly a code
    #[error("raised with {} argument(s)", .0.len())]
    Args(Vec<Value>),

    /// Unclassified failure, always resolved as the generic error
    #[error("unclassified error: {0}")]
    Unclassified(#[from] anyhow::Error),
}

impl ServiceError {
    pub fn coded(code: impl Into<String>) -> Self {
        Self::Coded {
            code: code.into(),
            detail: None,
        }
    }

    pub fn coded_with_detail(code: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Coded {
            code: code.into(),
            detail: Some(detail.into()),
        }
    }

    /// Internal detail suitable for logging
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Coded { detail, .. } => detail.clone(),
            Self::Args(_) => None,
            Self::Unclassified(e) => Some(format!("{e:#}")),
        }
    }
}

impl ErrorSource for ServiceError {
    fn error_code(&self) -> Option<&str> {
        match self {
            Self::Coded { code, .. } => Some(code),
            Self::Args(_) | Self::Unclassified(_) => None,
        }
    }

    fn args(&self) -> &[Value] {
        match self {
            Self::Args(args) => args,
            Self::Coded { .. } | Self::Unclassified(_) => &[],
        }
    }
}
