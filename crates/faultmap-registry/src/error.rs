use std::path::PathBuf;

use thiserror::Error;

/// Failures loading the error registry
///
/// All of these are fatal at startup: without definitions no error raised
/// later in the service can be resolved.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Definitions file does not exist
    #[error("error definitions not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// Definitions file exists but could not be read
    #[error("failed to read error definitions {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },

    /// Definitions are not valid YAML or do not match the expected shape
    #[error("failed to parse error definitions from {origin}: {source}")]
    ConfigParse { origin: String, source: serde_yaml::Error },

    /// Document has no top-level `errors` mapping
    #[error("error definitions from {origin} have no top-level `errors` mapping")]
    MissingErrors { origin: String },

    /// An individual definition violates a load-time invariant
    #[error("invalid error definition `{code}`: {reason}")]
    InvalidDefinition { code: String, reason: String },
}

/// Failures while resolving a single definition
///
/// Never leaves the crate; resolution substitutes the generic error.
#[derive(Debug, Error)]
pub(crate) enum ResolveError {
    #[error("status {0} is not a valid HTTP status")]
    InvalidStatus(String),
}
