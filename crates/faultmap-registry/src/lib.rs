//! Error registry: definitions, localized messages, and resolution
//!
//! Definitions and messages are loaded once from YAML and then shared
//! read-only. [`Resolver`] turns `(code, language)` into an
//! [`faultmap_core::ErrorInfo`] through a fixed fallback chain and never
//! fails; [`RegistryHandle`] lets a running service swap in reloaded data.

#![allow(clippy::must_use_candidate)]

mod catalog;
mod definition;
mod error;
mod handle;
mod resolver;
mod store;

pub use catalog::MessageCatalog;
pub use definition::{ErrorDefinition, StatusValue};
pub use error::RegistryError;
pub use handle::RegistryHandle;
pub use resolver::Resolver;
pub use store::DefinitionStore;
