//! Attribute value model.
//!
//! Attribute values are arbitrary JSON. Each stored value carries a coarse
//! [`ValueKind`] so clients can pick a renderer without inspecting the
//! payload. The kind is metadata only; storage never branches on it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Coarse semantic kind of an attribute value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// `true` or `false`.
    Bool,
    /// Any integral or floating-point number.
    Number,
    /// Text.
    String,
    /// JSON `null`.
    Null,
    /// Objects, arrays and anything else structured.
    Json,
}

impl ValueKind {
    /// Lowercase tag used in storage and on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Null => "null",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bool" => Ok(Self::Bool),
            "number" => Ok(Self::Number),
            "string" => Ok(Self::String),
            "null" => Ok(Self::Null),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown value kind: {other}")),
        }
    }
}

/// Classify a value. First match wins: bool, number, string, null, json.
///
/// Total: every value maps to exactly one kind.
pub fn classify(value: &Value) -> ValueKind {
    match value {
        Value::Bool(_) => ValueKind::Bool,
        Value::Number(_) => ValueKind::Number,
        Value::String(_) => ValueKind::String,
        Value::Null => ValueKind::Null,
        Value::Array(_) | Value::Object(_) => ValueKind::Json,
    }
}
