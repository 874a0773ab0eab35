//! Shape configuration: an ordered map of atomic values.
//!
//! Config carries style settings (fill, outline, font face, ...) the codec
//! never interprets. It is copied verbatim into records on save and
//! reattached verbatim on load, unknown keys included.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ordered configuration map attached to every shape.
pub type ConfigMap = BTreeMap<String, ConfigValue>;

/// An atomic configuration value.
///
/// The closed set of value types a config entry may hold. Integers and
/// floats stay distinct so a stored `2` does not come back as `2.0`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl ConfigValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ConfigValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric value of either an `Int` or a `Float`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ConfigValue::Int(n) => Some(*n as f64),
            ConfigValue::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        ConfigValue::Int(n)
    }
}

impl From<f64> for ConfigValue {
    fn from(x: f64) -> Self {
        ConfigValue::Float(x)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Str(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::Str(s)
    }
}
