use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use crate::definition::ErrorDefinition;
use crate::error::RegistryError;

/// Shape of a definitions document
#[derive(Deserialize)]
struct DefinitionDocument {
    #[serde(default)]
    errors: Option<HashMap<String, Option<ErrorDefinition>>>,
}

/// Error definitions keyed by code
///
/// Built once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct DefinitionStore {
    definitions: HashMap<String, ErrorDefinition>,
}

impl DefinitionStore {
    /// Load definitions from a YAML file
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ConfigNotFound`] when the file does not exist,
    /// and a read, parse or validation error when its content is unusable
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let raw = std::fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => RegistryError::ConfigNotFound {
                path: path.to_path_buf(),
            },
            _ => RegistryError::Read {
                path: path.to_path_buf(),
                source,
            },
        })?;

        Self::parse(&raw, &path.display().to_string())
    }

    /// Build a store from YAML text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid YAML, lacks the `errors`
    /// mapping, or contains an empty code
    pub fn from_yaml_str(raw: &str) -> Result<Self, RegistryError> {
        Self::parse(raw, "<inline>")
    }

    fn parse(raw: &str, origin: &str) -> Result<Self, RegistryError> {
        let parse_error = |source| RegistryError::ConfigParse {
            origin: origin.to_owned(),
            source,
        };

        let value: serde_yaml::Value = serde_yaml::from_str(raw).map_err(parse_error)?;
        if value.is_null() {
            return Err(RegistryError::MissingErrors {
                origin: origin.to_owned(),
            });
        }

        let document: DefinitionDocument = serde_yaml::from_value(value).map_err(parse_error)?;
        let Some(entries) = document.errors else {
            return Err(RegistryError::MissingErrors {
                origin: origin.to_owned(),
            });
        };

        let mut definitions = HashMap::with_capacity(entries.len());
        for (code, definition) in entries {
            if code.trim().is_empty() {
                return Err(RegistryError::InvalidDefinition {
                    code,
                    reason: "error code must not be empty".to_owned(),
                });
            }

            // A bare `CODE:` entry has no data and resolves like an unknown code
            let Some(definition) = definition else {
                tracing::debug!(%code, origin, "skipping empty error definition");
                continue;
            };

            definitions.insert(code, definition);
        }

        Ok(Self { definitions })
    }

    pub fn get(&self, code: &str) -> Option<&ErrorDefinition> {
        self.definitions.get(code)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Known codes, sorted
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.definitions.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}
