//! YAML to JSON conversion for YAML input documents
//!
//! Paths are always evaluated over [`serde_json::Value`]. YAML documents are
//! converted first, keeping scalar keys and unwrapping tagged values.

use crate::error::{PeekError, Result};
use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;

/// Utilities for converting YAML values into queryable JSON values
pub struct YamlJsonConverter;

impl YamlJsonConverter {
    /// Convert a YAML value to a JSON value
    ///
    /// Non-string mapping keys that are numbers or booleans become their
    /// string form. Any other key, or a float JSON cannot represent (NaN,
    /// infinity), is a conversion error.
    pub fn yaml_to_json(yaml: &YamlValue) -> Result<JsonValue> {
        match yaml {
            YamlValue::Null => Ok(JsonValue::Null),
            YamlValue::Bool(b) => Ok(JsonValue::Bool(*b)),
            YamlValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(JsonValue::Number(i.into()))
                } else if let Some(u) = n.as_u64() {
                    Ok(JsonValue::Number(u.into()))
                } else if let Some(f) = n.as_f64() {
                    serde_json::Number::from_f64(f)
                        .map(JsonValue::Number)
                        .ok_or_else(|| {
                            PeekError::type_conversion(format!("YAML number {}", f), "JSON number")
                        })
                } else {
                    Err(PeekError::type_conversion(
                        format!("YAML number {:?}", n),
                        "JSON number",
                    ))
                }
            }
            YamlValue::String(s) => Ok(JsonValue::String(s.clone())),
            YamlValue::Sequence(seq) => {
                let items: Result<Vec<JsonValue>> = seq.iter().map(Self::yaml_to_json).collect();
                Ok(JsonValue::Array(items?))
            }
            YamlValue::Mapping(map) => {
                let mut object = serde_json::Map::new();
                for (k, v) in map {
                    object.insert(Self::key_to_string(k)?, Self::yaml_to_json(v)?);
                }
                Ok(JsonValue::Object(object))
            }
            YamlValue::Tagged(tagged) => Self::yaml_to_json(&tagged.value),
        }
    }

    /// Parse YAML text and convert it in one step
    pub fn parse_yaml(text: &str) -> Result<JsonValue> {
        let yaml: YamlValue = serde_yaml::from_str(text)?;
        Self::yaml_to_json(&yaml)
    }

    fn key_to_string(key: &YamlValue) -> Result<String> {
        match key {
            YamlValue::String(s) => Ok(s.clone()),
            YamlValue::Number(n) => Ok(n.to_string()),
            YamlValue::Bool(b) => Ok(b.to_string()),
            _ => Err(PeekError::type_conversion(
                format!("YAML key {:?}", key),
                "JSON string key",
            )),
        }
    }
}
