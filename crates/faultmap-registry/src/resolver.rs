use faultmap_config::RegistryConfig;
use faultmap_core::{
    ErrorInfo, ErrorSource, GENERIC_CATEGORY, GENERIC_MESSAGE, GENERIC_STATUS, Language, extract_code,
};

use crate::catalog::MessageCatalog;
use crate::definition::ErrorDefinition;
use crate::error::{RegistryError, ResolveError};
use crate::store::DefinitionStore;

/// Maps error codes and language preferences to [`ErrorInfo`]
///
/// Pure function over immutable data: the same inputs always produce the
/// same output and no call can fail.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    store: DefinitionStore,
    catalog: MessageCatalog,
}

impl Resolver {
    pub const fn new(store: DefinitionStore, catalog: MessageCatalog) -> Self {
        Self { store, catalog }
    }

    /// Load definitions and messages from the configured sources
    ///
    /// # Errors
    ///
    /// Returns an error if the definitions file is missing or unusable.
    /// Message files never cause an error.
    pub fn load(config: &RegistryConfig) -> Result<Self, RegistryError> {
        let store = DefinitionStore::load(&config.definitions)?;
        let catalog = MessageCatalog::load(config);

        tracing::info!(
            definitions = store.len(),
            languages = ?catalog.languages(),
            "error registry loaded"
        );

        Ok(Self::new(store, catalog))
    }

    pub const fn store(&self) -> &DefinitionStore {
        &self.store
    }

    pub const fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// Resolve a code against a raw language preference
    pub fn resolve(&self, code: &str, raw_language: Option<&str>) -> ErrorInfo {
        self.resolve_normalized(code, &Language::normalize(raw_language))
    }

    /// Resolve a raised error against a raw language preference
    pub fn resolve_error(&self, error: &(impl ErrorSource + ?Sized), raw_language: Option<&str>) -> ErrorInfo {
        self.resolve(&extract_code(error), raw_language)
    }

    /// Resolve a code for an already normalized language
    pub fn resolve_normalized(&self, code: &str, language: &Language) -> ErrorInfo {
        let Some(definition) = self.store.get(code) else {
            return ErrorInfo::generic();
        };

        match self.assemble(code, definition, language) {
            Ok(info) => info,
            Err(e) => {
                tracing::warn!(code, error = %e, "malformed error definition, using generic error");
                ErrorInfo::generic()
            }
        }
    }

    fn assemble(&self, code: &str, definition: &ErrorDefinition, language: &Language) -> Result<ErrorInfo, ResolveError> {
        let status = definition.status_or(GENERIC_STATUS)?;

        Ok(ErrorInfo {
            code: definition.code().unwrap_or(code).to_owned(),
            category: definition.category().unwrap_or(GENERIC_CATEGORY).to_owned(),
            message: self.message(code, definition, language.as_str()),
            status,
        })
    }

    /// Pick the message, first hit wins:
    /// localized by code, localized by message key, localized by literal
    /// message, literal message, generic message.
    fn message(&self, code: &str, definition: &ErrorDefinition, language: &str) -> String {
        let localized = |key: &str| self.catalog.get(language, key).filter(|m| !m.is_empty());
        let literal = definition.literal_message();

        // Literal message doubling as a catalog key is legacy behavior kept
        // for existing message files. Candidate for removal.
        let literal_as_key = || {
            if literal.is_empty() {
                None
            } else {
                self.catalog.get(language, literal)
            }
        };

        let message = localized(code)
            .or_else(|| definition.message_key().and_then(localized))
            .or_else(literal_as_key)
            .unwrap_or(literal);

        if message.is_empty() {
            GENERIC_MESSAGE.to_owned()
        } else {
            message.to_owned()
        }
    }
}
