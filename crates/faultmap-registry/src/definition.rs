use std::fmt;

use serde::{Deserialize, Deserializer};

use crate::error::ResolveError;

/// Status written into a definition file
///
/// Accepts both `status: 404` and `status: "404"`; range checking happens
/// at resolution time so one bad entry cannot take down the whole registry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StatusValue {
    Number(i64),
    Text(String),
}

impl StatusValue {
    /// The value as an HTTP status in `100..=599`
    pub fn http_status(&self) -> Option<u16> {
        let status = match self {
            Self::Number(n) => u16::try_from(*n).ok()?,
            Self::Text(s) => s.trim().parse::<u16>().ok()?,
        };

        (100..=599).contains(&status).then_some(status)
    }
}

impl fmt::Display for StatusValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

/// Scalar accepted where text is expected
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

/// Read a text field that may be written as a bare number or boolean
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|scalar| match scalar {
        Scalar::Text(s) => s,
        Scalar::Integer(n) => n.to_string(),
        Scalar::Float(f) => f.to_string(),
        Scalar::Bool(b) => b.to_string(),
    }))
}

/// One entry of the `errors` mapping
///
/// Every field is optional in the source document; the accessors apply the
/// defaults resolution relies on. Text fields also take numbers and booleans
/// (`message: 504` reads as `"504"`). Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorDefinition {
    /// Code reported to clients, overriding the mapping key
    #[serde(default, deserialize_with = "scalar_text")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub category: Option<String>,
    /// Literal default message
    #[serde(default, deserialize_with = "scalar_text")]
    pub message: Option<String>,
    /// Indirection into the message catalog
    #[serde(default, deserialize_with = "scalar_text")]
    pub message_key: Option<String>,
    #[serde(default)]
    pub status: Option<StatusValue>,
}

impl ErrorDefinition {
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref().filter(|c| !c.is_empty())
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Literal message, empty when unset
    pub fn literal_message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }

    pub fn message_key(&self) -> Option<&str> {
        self.message_key.as_deref().filter(|k| !k.is_empty())
    }

    /// Status to report, `default` when the definition leaves it out
    pub(crate) fn status_or(&self, default: u16) -> Result<u16, ResolveError> {
        match &self.status {
            None => Ok(default),
            Some(value) => value
                .http_status()
                .ok_or_else(|| ResolveError::InvalidStatus(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_accepts_numbers_and_numeric_strings() {
        let def: ErrorDefinition = serde_yaml::from_str("status: 404").unwrap();
        assert_eq!(def.status_or(500).unwrap(), 404);

        let def: ErrorDefinition = serde_yaml::from_str("status: \" 422 \"").unwrap();
        assert_eq!(def.status_or(500).unwrap(), 422);
    }

    #[test]
    fn missing_status_uses_default() {
        let def = ErrorDefinition::default();
        assert_eq!(def.status_or(500).unwrap(), 500);
    }

    #[test]
    fn out_of_range_status_is_rejected() {
        for raw in ["status: 42", "status: 600", "status: -1", "status: teapot", "status: 70000"] {
            let def: ErrorDefinition = serde_yaml::from_str(raw).unwrap();
            assert!(def.status_or(500).is_err(), "{raw}");
        }
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let def: ErrorDefinition = serde_yaml::from_str("code: ''\ncategory: ''\nmessage_key: ''").unwrap();
        assert!(def.code().is_none());
        assert!(def.category().is_none());
        assert!(def.message_key().is_none());
        assert_eq!(def.literal_message(), "");
    }

    #[test]
    fn scalar_text_fields_read_as_text() {
        let def: ErrorDefinition =
            serde_yaml::from_str("code: 504\ncategory: true\nmessage: 504\nmessage_key: 1001\nstatus: 504").unwrap();
        assert_eq!(def.code(), Some("504"));
        assert_eq!(def.category(), Some("true"));
        assert_eq!(def.literal_message(), "504");
        assert_eq!(def.message_key(), Some("1001"));
    }

    #[test]
    fn null_text_field_is_absent() {
        let def: ErrorDefinition = serde_yaml::from_str("message: ~\ncategory:").unwrap();
        assert_eq!(def.literal_message(), "");
        assert!(def.category().is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let def: ErrorDefinition = serde_yaml::from_str("message: Oops\nseverity: high").unwrap();
        assert_eq!(def.literal_message(), "Oops");
    }
}
