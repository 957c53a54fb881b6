#![allow(clippy::must_use_candidate)]

mod env;
mod loader;
pub mod registry;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use registry::*;
pub use server::*;
pub use telemetry::{LogFormat, TelemetryConfig};

/// Top-level faultmap configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Error registry sources
    #[serde(default)]
    pub registry: RegistryConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
