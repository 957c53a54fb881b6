//! Registry files on disk for integration tests

use std::path::Path;

use faultmap_config::RegistryConfig;
use tempfile::TempDir;

pub const DEFINITIONS: &str = r#"errors:
  VALIDATION_FAILED:
    category: VALIDATION
    message: Invalid input
    message_key: validation.failed
    status: 422
  NOT_FOUND:
    category: GENERAL
    message: Resource not found
    status: 404
  RATE_LIMITED:
    category: THROTTLING
    message: Too many requests
    status: "429"
  BROKEN_STATUS:
    message: Broken
    status: 1200
"#;

pub const ENGLISH: &str = "validation.failed: The request contains invalid fields\n";

pub const HINDI: &str = r#"VALIDATION_FAILED: "अमान्य इनपुट"
NOT_FOUND: "संसाधन नहीं मिला"
"#;

/// Temporary directory holding `errors.yml` and `locale/messages_<lang>.yml`
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    /// Registry with the default definitions and English and Hindi messages
    pub fn new() -> Self {
        Self::with(DEFINITIONS, &[("en", ENGLISH), ("hi", HINDI)])
    }

    pub fn with(definitions: &str, messages: &[(&str, &str)]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("locale")).unwrap();

        let fixture = Self { dir };
        fixture.write_definitions(definitions);
        for (language, body) in messages {
            fixture.write_messages(language, body);
        }
        fixture
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_definitions(&self, body: &str) {
        std::fs::write(self.path().join("errors.yml"), body).unwrap();
    }

    pub fn write_messages(&self, language: &str, body: &str) {
        std::fs::write(self.path().join(format!("locale/messages_{language}.yml")), body).unwrap();
    }

    pub fn registry_config(&self) -> RegistryConfig {
        RegistryConfig {
            definitions: self.path().join("errors.yml"),
            messages_dir: Some(self.path().join("locale")),
            languages: vec!["en".to_owned(), "hi".to_owned()],
        }
    }
}
