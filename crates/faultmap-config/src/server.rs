use std::net::SocketAddr;

use secrecy::SecretString;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub listen_address: Option<SocketAddr>,
    #[serde(default)]
    pub health: HealthConfig,
    /// Registry reload endpoint; disabled when absent
    #[serde(default)]
    pub reload: Option<ReloadConfig>,
}

/// Health check endpoint configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_health_path")]
    pub path: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: default_health_path(),
        }
    }
}

/// Registry reload endpoint configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReloadConfig {
    /// Shared secret expected in the `x-reload-secret` header
    pub secret: SecretString,
    #[serde(default = "default_reload_path")]
    pub path: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_enabled() -> bool {
    true
}

fn default_health_path() -> String {
    "/health".to_owned()
}

fn default_reload_path() -> String {
    "/internal/reload".to_owned()
}
