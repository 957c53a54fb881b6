use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

use faultmap_config::RegistryConfig;
use serde_yaml::Value;

/// Localized messages: language → (code or message key → text)
///
/// Missing languages and keys are valid states; lookups simply miss.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    languages: HashMap<String, HashMap<String, String>>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `messages_<lang>.yml` for every configured language
    ///
    /// Each configured language gets an entry even without a file, so a
    /// missing or malformed file degrades to "no localized text" instead of
    /// failing startup. Entries that are not text are skipped one by one.
    pub fn load(config: &RegistryConfig) -> Self {
        let mut catalog = Self::new();

        for language in &config.languages {
            let entries = config
                .messages_file(language)
                .map(|path| load_language(&path, language))
                .unwrap_or_default();
            catalog.insert_language(language.clone(), entries);
        }

        catalog
    }

    /// Add or replace one language's messages
    pub fn insert_language(&mut self, language: impl Into<String>, entries: HashMap<String, String>) {
        self.languages.insert(language.into(), entries);
    }

    /// Builder form of [`Self::insert_language`]
    #[must_use]
    pub fn with_language<K, V>(mut self, language: &str, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self.insert_language(language, entries);
        self
    }

    /// Raw catalog entry, including empty strings
    pub fn get(&self, language: &str, key: &str) -> Option<&str> {
        self.languages.get(language)?.get(key).map(String::as_str)
    }

    /// Declared languages, sorted
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    /// Number of entries for a language, zero when undeclared
    pub fn message_count(&self, language: &str) -> usize {
        self.languages.get(language).map_or(0, HashMap::len)
    }
}

fn load_language(path: &Path, language: &str) -> HashMap<String, String> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(language, path = %path.display(), "no message file for language");
            return HashMap::new();
        }
        Err(e) => {
            tracing::warn!(language, path = %path.display(), error = %e, "failed to read message file");
            return HashMap::new();
        }
    };

    let mapping = match serde_yaml::from_str::<Value>(&raw) {
        Ok(Value::Mapping(mapping)) => mapping,
        Ok(Value::Null) => return HashMap::new(),
        Ok(_) => {
            tracing::warn!(language, path = %path.display(), "ignoring message file without a top-level mapping");
            return HashMap::new();
        }
        Err(e) => {
            tracing::warn!(language, path = %path.display(), error = %e, "ignoring malformed message file");
            return HashMap::new();
        }
    };

    let mut entries = HashMap::with_capacity(mapping.len());

    for (key, value) in mapping {
        match (scalar_text(&key), scalar_text(&value)) {
            (Some(key), Some(text)) => {
                entries.insert(key, text);
            }
            (key, _) => {
                tracing::warn!(language, key = ?key, "skipping message entry that is not text");
            }
        }
    }

    tracing::debug!(language, messages = entries.len(), "loaded message file");
    entries
}

/// Text of a scalar; numbers and booleans are written out as-is
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
