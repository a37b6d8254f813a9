//! Parameter values carried by API requests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Map of parameter names to values for a single API command.
///
/// Keys are unique per request; a repeated assignment overwrites the earlier
/// value. `BTreeMap` keeps the serialised form deterministic.
pub type ParamMap = BTreeMap<String, ParamValue>;

/// A single parameter value.
///
/// The shell grammar supports exactly one level of nesting: a value is
/// either a scalar string or a brace-delimited map of scalar assignments.
/// Deeper nesting is not representable, matching the command syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// A plain string value.
    Scalar(String),
    /// A one-level nested map of scalar assignments.
    Map(BTreeMap<String, String>),
}

impl ParamValue {
    /// Builds a scalar value.
    #[must_use]
    pub fn scalar(value: impl Into<String>) -> Self {
        Self::Scalar(value.into())
    }

    /// Returns the scalar text when this value is not a nested map.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(value) => Some(value.as_str()),
            Self::Map(_) => None,
        }
    }

    /// Returns the nested assignments when this value is a map.
    #[must_use]
    pub const fn as_map(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::Scalar(_) => None,
            Self::Map(entries) => Some(entries),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_values_serialise_as_strings() {
        let value = ParamValue::scalar("example.org");
        let encoded = serde_json::to_string(&value).expect("serialise scalar");
        assert_eq!(encoded, "\"example.org\"");
    }

    #[test]
    fn map_values_serialise_as_objects() {
        let mut entries = BTreeMap::new();
        entries.insert(String::from("x"), String::from("1"));
        entries.insert(String::from("y"), String::from("2"));
        let value = ParamValue::Map(entries);
        let encoded = serde_json::to_string(&value).expect("serialise map");
        assert_eq!(encoded, "{\"x\":\"1\",\"y\":\"2\"}");
    }

    #[test]
    fn accessors_distinguish_variants() {
        let scalar = ParamValue::scalar("v");
        assert_eq!(scalar.as_scalar(), Some("v"));
        assert!(scalar.as_map().is_none());

        let map = ParamValue::Map(BTreeMap::new());
        assert!(map.as_scalar().is_none());
        assert!(map.as_map().is_some());
    }
}
