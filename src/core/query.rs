//! Public query operations over structured values or raw JSON text
//!
//! These wrap the borrowed evaluator in [`crate::core::evaluate`] so callers
//! can pass either a [`serde_json::Value`] or a JSON string. Text that fails
//! to decode gives the empty answer for each query: `None`, `false`, `0` or
//! [`JsonType::Unknown`].

use crate::core::evaluate::Evaluator;
use crate::core::value::{JsonInput, JsonType};
use serde_json::Value;
use std::collections::BTreeMap;

impl Evaluator {
    /// Get a copy of the value at `path`
    pub fn get<'a>(&self, data: impl Into<JsonInput<'a>>, path: &str) -> Option<Value> {
        let document = data.into().resolve()?;
        self.evaluate(&document, path).cloned()
    }

    /// Get the value at each of `paths`, decoding the input once
    ///
    /// Every path gets an entry; a path that finds nothing maps to `None`.
    pub fn get_many<'a>(
        &self,
        data: impl Into<JsonInput<'a>>,
        paths: &[&str],
    ) -> BTreeMap<String, Option<Value>> {
        let document = data.into().resolve();
        paths
            .iter()
            .map(|path| {
                let found = document
                    .as_deref()
                    .and_then(|document| self.evaluate(document, path))
                    .cloned();
                (path.to_string(), found)
            })
            .collect()
    }

    /// Whether `path` finds a value, a JSON null included
    pub fn exists_input<'a>(&self, data: impl Into<JsonInput<'a>>, path: &str) -> bool {
        data.into()
            .resolve()
            .map(|document| self.exists(&document, path))
            .unwrap_or(false)
    }

    /// Size of the value at `path`, or of the whole document
    pub fn size_input<'a>(&self, data: impl Into<JsonInput<'a>>, path: Option<&str>) -> usize {
        data.into()
            .resolve()
            .map(|document| self.size(&document, path))
            .unwrap_or(0)
    }

    /// Type of the value at `path`, or of the whole document
    pub fn type_of_input<'a>(
        &self,
        data: impl Into<JsonInput<'a>>,
        path: Option<&str>,
    ) -> JsonType {
        data.into()
            .resolve()
            .map(|document| self.type_of(&document, path))
            .unwrap_or(JsonType::Unknown)
    }
}

/// Get the value at `path`
///
/// ```rust
/// use serde_json::json;
///
/// let data = json!({"orders": [{"items": [{"name": "Book"}, {"name": "Laptop"}]}]});
/// assert_eq!(
///     jsonpeek::get(&data, "$.orders[0].items[1].name"),
///     Some(json!("Laptop"))
/// );
/// assert_eq!(jsonpeek::get(r#"{"a": null}"#, "$.a"), Some(json!(null)));
/// assert_eq!(jsonpeek::get("not json", "$"), None);
/// ```
pub fn get<'a>(data: impl Into<JsonInput<'a>>, path: &str) -> Option<Value> {
    Evaluator::new().get(data, path)
}

/// Get the values at several paths of one document
///
/// ```rust
/// use serde_json::json;
///
/// let found = jsonpeek::get_many(r#"{"id": 7, "tags": ["a"]}"#, &["$.id", "$.tags[0]", "$.name"]);
/// assert_eq!(found["$.id"], Some(json!(7)));
/// assert_eq!(found["$.tags[0]"], Some(json!("a")));
/// assert_eq!(found["$.name"], None);
/// ```
pub fn get_many<'a>(
    data: impl Into<JsonInput<'a>>,
    paths: &[&str],
) -> BTreeMap<String, Option<Value>> {
    Evaluator::new().get_many(data, paths)
}

/// Whether `path` finds a value; a found JSON null counts
pub fn exists<'a>(data: impl Into<JsonInput<'a>>, path: &str) -> bool {
    Evaluator::new().exists_input(data, path)
}

/// Length of the array, object or string at `path` (or of the root)
pub fn size<'a>(data: impl Into<JsonInput<'a>>, path: Option<&str>) -> usize {
    Evaluator::new().size_input(data, path)
}

/// Type tag of the value at `path` (or of the root)
pub fn type_of<'a>(data: impl Into<JsonInput<'a>>, path: Option<&str>) -> JsonType {
    Evaluator::new().type_of_input(data, path)
}
