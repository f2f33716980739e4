use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Name of a kind of fake data, e.g. `Email` or `Hex Color`.
///
/// The label keeps the caller's spelling; dispatch goes through [`FieldType::key`],
/// which is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct FieldType(String);

impl FieldType {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lookup key used by the catalog and the generator registry.
    pub fn key(&self) -> String {
        normalize_key(&self.0)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FieldType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldType {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for FieldType {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Case-insensitive key for a field type label.
pub fn normalize_key(label: &str) -> String {
    label.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_ignores_case() {
        assert_eq!(FieldType::from("Hex Color").key(), "hex color");
        assert_eq!(FieldType::from("HEX COLOR").key(), "hex color");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&FieldType::from("Email")).expect("serialize");
        assert_eq!(json, "\"Email\"");
    }
}
