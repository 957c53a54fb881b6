use std::sync::Arc;

use arc_swap::ArcSwap;
use faultmap_config::RegistryConfig;
use faultmap_core::{ErrorInfo, ErrorSource};

use crate::error::RegistryError;
use crate::resolver::Resolver;

/// Shared, swappable access to the live [`Resolver`]
///
/// Cloning is cheap and every clone sees the same snapshot. Readers never
/// block; a reload publishes a fully built resolver with a single atomic
/// store, so no request can observe a half-loaded catalog.
#[derive(Debug, Clone)]
pub struct RegistryHandle {
    current: Arc<ArcSwap<Resolver>>,
}

impl RegistryHandle {
    pub fn new(resolver: Resolver) -> Self {
        Self {
            current: Arc::new(ArcSwap::from_pointee(resolver)),
        }
    }

    /// Load the registry from its configured sources
    ///
    /// # Errors
    ///
    /// Returns an error if the definitions file is missing or unusable
    pub fn load(config: &RegistryConfig) -> Result<Self, RegistryError> {
        Resolver::load(config).map(Self::new)
    }

    /// Current snapshot, unaffected by later reloads
    pub fn snapshot(&self) -> Arc<Resolver> {
        self.current.load_full()
    }

    /// Resolve against the current snapshot
    pub fn resolve(&self, code: &str, raw_language: Option<&str>) -> ErrorInfo {
        self.current.load().resolve(code, raw_language)
    }

    /// Resolve a raised error against the current snapshot
    pub fn resolve_error(&self, error: &(impl ErrorSource + ?Sized), raw_language: Option<&str>) -> ErrorInfo {
        self.current.load().resolve_error(error, raw_language)
    }

    /// Publish a new resolver
    pub fn replace(&self, resolver: Resolver) {
        self.current.store(Arc::new(resolver));
    }

    /// Reload from the configured sources and publish the result
    ///
    /// The current snapshot stays active when loading fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the new definitions are missing or unusable
    pub fn reload(&self, config: &RegistryConfig) -> Result<(), RegistryError> {
        let resolver = Resolver::load(config).inspect_err(|e| {
            tracing::warn!(error = %e, "registry reload rejected, keeping current definitions");
        })?;

        self.replace(resolver);
        tracing::info!("error registry reloaded");

        Ok(())
    }
}
