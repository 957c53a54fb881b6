use std::fmt;

/// Language used when a preference is missing or malformed
pub const DEFAULT_LANGUAGE: &str = "en";

/// Normalized two-letter, lower-case language tag
///
/// Only constructed through [`Language::normalize`] (or [`Default`]), so a
/// value always holds exactly two ASCII lower-case letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language(String);

impl Language {
    /// Normalize a raw language preference such as an `Accept-Language` value
    ///
    /// Takes the segment before the first comma, trims and lower-cases it and
    /// keeps at most the first two characters, so `"hi-IN, en;q=0.8"` becomes
    /// `"hi"`. Anything that does not yield two ASCII letters falls back to
    /// `"en"`. Never fails.
    pub fn normalize(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        let first = raw.split(',').next().unwrap_or_default().trim().to_lowercase();
        let tag: String = first.chars().take(2).collect();

        if tag.len() == 2 && tag.chars().all(|c| c.is_ascii_lowercase()) {
            Self(tag)
        } else {
            Self::default()
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Language {
    fn default() -> Self {
        Self(DEFAULT_LANGUAGE.to_owned())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Language {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
