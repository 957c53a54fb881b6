use std::path::PathBuf;

use serde::Deserialize;

/// Where the error registry is loaded from
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// YAML document with the top-level `errors` mapping
    #[serde(default = "default_definitions")]
    pub definitions: PathBuf,
    /// Directory holding `messages_<lang>.yml` files
    #[serde(default)]
    pub messages_dir: Option<PathBuf>,
    /// Languages a message file is looked up for
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
}

impl RegistryConfig {
    /// File a language's messages are read from, if a messages directory is set
    pub fn messages_file(&self, language: &str) -> Option<PathBuf> {
        self.messages_dir
            .as_ref()
            .map(|dir| dir.join(format!("messages_{language}.yml")))
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            definitions: default_definitions(),
            messages_dir: None,
            languages: default_languages(),
        }
    }
}

fn default_definitions() -> PathBuf {
    PathBuf::from("errors.yml")
}

fn default_languages() -> Vec<String> {
    vec!["en".to_owned(), "hi".to_owned()]
}
