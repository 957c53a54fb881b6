//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use faultmap_config::{Config, HealthConfig, ReloadConfig, ServerConfig};
use secrecy::SecretString;

use super::fixtures::Fixture;

/// Secret the reload endpoint is configured with by [`ConfigBuilder::with_reload`]
pub const RELOAD_SECRET: &str = "test-reload-secret";

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Minimal config reading its registry from `fixture`
    pub fn new(fixture: &Fixture) -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig {
                        enabled: true,
                        path: "/health".to_owned(),
                    },
                    reload: None,
                },
                registry: fixture.registry_config(),
                telemetry: None,
            },
        }
    }

    /// Enable the reload endpoint at its default path
    pub fn with_reload(mut self) -> Self {
        self.config.server.reload = Some(ReloadConfig {
            secret: SecretString::from(RELOAD_SECRET),
            path: "/internal/reload".to_owned(),
        });
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
