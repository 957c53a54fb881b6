//! HTTP surface for the faultmap error registry
//!
//! Handlers fail with [`ApiError`]; the error-resolution layer turns that
//! into the registry's localized [`faultmap_core::ErrorInfo`] body and status.

#![allow(clippy::must_use_candidate)]

mod errors;
mod reload;
mod resolve;
mod response;

use std::net::SocketAddr;

use axum::Router;
use axum::routing::{get, post};
use faultmap_config::Config;
use faultmap_registry::RegistryHandle;
use tower_http::trace::TraceLayer;

pub use errors::{ResolveBody, errors_router};
pub use reload::{RELOAD_SECRET_HEADER, ReloadState, reload_handler};
pub use resolve::{resolve_errors_middleware, with_error_resolution};
pub use response::{ApiError, ErrorResponse};

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
    registry: RegistryHandle,
}

impl Server {
    /// Build the server from configuration, loading the registry
    ///
    /// # Errors
    ///
    /// Returns an error if the error definitions cannot be loaded
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let registry = RegistryHandle::load(&config.registry)
            .map_err(|e| anyhow::anyhow!("failed to load error registry: {e}"))?;

        Ok(Self::with_registry(config, registry))
    }

    /// Build the server around an already loaded registry
    pub fn with_registry(config: Config, registry: RegistryHandle) -> Self {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let mut app = errors_router(registry.clone());

        if config.server.health.enabled {
            app = app.route(&config.server.health.path, get(|| async { "ok" }));
        }

        if let Some(reload) = config.server.reload {
            let state = ReloadState {
                registry: registry.clone(),
                config: config.registry,
                secret: reload.secret,
            };
            app = app.route(&reload.path, post(reload_handler).with_state(state));
        }

        // Error resolution wraps every route so raised errors leave localized
        app = with_error_resolution(app, registry.clone());

        app = app.layer(TraceLayer::new_for_http());

        Self {
            router: app,
            listen_address,
            registry,
        }
    }

    /// Get the configured listen address
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Handle to the live registry, shared with the reload endpoint
    pub const fn registry(&self) -> &RegistryHandle {
        &self.registry
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
