//! Value classification and query input handling
//!
//! Queries accept either an already decoded [`serde_json::Value`] or raw JSON
//! text. Text that fails to decode is treated the same as a path that finds
//! nothing; the caller sees an empty result rather than an error.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

/// Type tag reported by the type-of query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
    /// Nothing was found, or the input could not be decoded
    Unknown,
}

impl JsonType {
    /// Classify a query result; absence maps to [`JsonType::Unknown`]
    pub fn of(value: Option<&Value>) -> Self {
        match value {
            None => Self::Unknown,
            Some(Value::Null) => Self::Null,
            Some(Value::Bool(_)) => Self::Boolean,
            Some(Value::Number(_)) => Self::Number,
            Some(Value::String(_)) => Self::String,
            Some(Value::Array(_)) => Self::Array,
            Some(Value::Object(_)) => Self::Object,
        }
    }

    /// The lowercase tag name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a tag name as produced by [`JsonType::as_str`]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "null" => Some(Self::Null),
            "boolean" => Some(Self::Boolean),
            "number" => Some(Self::Number),
            "string" => Some(Self::String),
            "array" => Some(Self::Array),
            "object" => Some(Self::Object),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Natural length of a value: elements, entries or characters
///
/// Strings count Unicode scalar values, not bytes. Everything else, and
/// absence, has size 0.
pub fn value_size(value: Option<&Value>) -> usize {
    match value {
        Some(Value::Array(items)) => items.len(),
        Some(Value::Object(map)) => map.len(),
        Some(Value::String(s)) => s.chars().count(),
        Some(Value::Null) | Some(Value::Bool(_)) | Some(Value::Number(_)) | None => 0,
    }
}

/// Data handed to a query: a decoded value or JSON text still to be decoded
#[derive(Debug, Clone, Copy)]
pub enum JsonInput<'a> {
    Value(&'a Value),
    Text(&'a str),
}

impl<'a> JsonInput<'a> {
    /// Produce the value to query, decoding text if needed
    ///
    /// Returns `None` when the text is not valid JSON.
    pub fn resolve(self) -> Option<Cow<'a, Value>> {
        match self {
            Self::Value(value) => Some(Cow::Borrowed(value)),
            Self::Text(text) => match serde_json::from_str::<Value>(text) {
                Ok(value) => Some(Cow::Owned(value)),
                Err(e) => {
                    debug!("input text is not valid JSON: {}", e);
                    None
                }
            },
        }
    }
}

impl<'a> From<&'a Value> for JsonInput<'a> {
    fn from(value: &'a Value) -> Self {
        Self::Value(value)
    }
}

impl<'a> From<&'a str> for JsonInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for JsonInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text.as_str())
    }
}
