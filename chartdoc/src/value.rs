//! Dynamically typed configuration values.
//!
//! Values read from the YAML tree are converted once into [`Value`], a
//! closed tagged variant. Every later stage switches on the tag rather
//! than inspecting YAML nodes.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// A configuration value.
///
/// Mappings are keyed by string and ordered by key, which keeps table
/// cells and schema defaults deterministic.
///
/// # Examples
///
/// ```
/// use chartdoc::{ParamType, Value};
///
/// let value = Value::from_yaml(serde_yaml::from_str("[1, two]").unwrap());
/// assert_eq!(value.param_type(), ParamType::Array);
/// assert_eq!(value.to_json(), r#"[1,"two"]"#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Explicit null (`~`, `null` or an empty YAML value).
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Integer or floating point scalar.
    Number(serde_yaml::Number),
    /// String scalar.
    String(String),
    /// Sequence of values.
    Sequence(Vec<Value>),
    /// Mapping with string keys.
    Mapping(BTreeMap<String, Value>),
}

/// Coarse type of a parameter, as written to the README and the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamType {
    /// `null`
    Null,
    /// `string`
    String,
    /// `boolean`
    Boolean,
    /// `number`; integers and floats collapse to one kind.
    Number,
    /// `array`
    Array,
    /// `object`
    Object,
    /// Anything the flattener could not classify.
    Unknown,
}

impl ParamType {
    /// Lowercase name used in the schema `type` field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::Array => "array",
            Self::Object => "object",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ParamType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Value {
    /// Convert a parsed YAML node.
    ///
    /// Non-string mapping keys are rendered to their YAML scalar text and
    /// tagged nodes are unwrapped.
    #[must_use]
    pub fn from_yaml(node: serde_yaml::Value) -> Self {
        match node {
            serde_yaml::Value::Null => Self::Null,
            serde_yaml::Value::Bool(b) => Self::Bool(b),
            serde_yaml::Value::Number(n) => Self::Number(n),
            serde_yaml::Value::String(s) => Self::String(s),
            serde_yaml::Value::Sequence(items) => {
                Self::Sequence(items.into_iter().map(Self::from_yaml).collect())
            }
            serde_yaml::Value::Mapping(map) => Self::Mapping(
                map.into_iter()
                    .map(|(k, v)| (key_text(&k), Self::from_yaml(v)))
                    .collect(),
            ),
            serde_yaml::Value::Tagged(tagged) => Self::from_yaml(tagged.value),
        }
    }

    /// Coarse type of this value.
    #[must_use]
    pub fn param_type(&self) -> ParamType {
        match self {
            Self::Null => ParamType::Null,
            Self::Bool(_) => ParamType::Boolean,
            Self::Number(_) => ParamType::Number,
            Self::String(_) => ParamType::String,
            Self::Sequence(_) => ParamType::Array,
            Self::Mapping(_) => ParamType::Object,
        }
    }

    /// Returns true for [`Value::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// An empty sequence.
    #[must_use]
    pub fn empty_sequence() -> Self {
        Self::Sequence(Vec::new())
    }

    /// An empty mapping.
    #[must_use]
    pub fn empty_mapping() -> Self {
        Self::Mapping(BTreeMap::new())
    }

    /// Compact JSON text of this value.
    #[must_use]
    pub fn to_json(&self) -> String {
        // Serializing into a String cannot fail for this type.
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => n.serialize(serializer),
            Self::String(s) => serializer.serialize_str(s),
            Self::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Mapping(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
        }
    }
}

/// Text of a mapping key, used for both flattened paths and
/// [`Value::Mapping`] keys.
pub(crate) fn key_text(key: &serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Null => "null".to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
