//! jsonpeek: extract values from JSON and YAML documents with a compact path syntax
//!
//! A path starts at the root marker `$` and walks down through object members
//! and array elements:
//!
//! | Path            | Selects                                              |
//! |-----------------|------------------------------------------------------|
//! | `$`             | the whole document                                   |
//! | `$.a.b`         | member `b` of member `a`                             |
//! | `$.list[0]`     | the first element of `list`                          |
//! | `$.list[*]`     | `list` itself, provided it is an array               |
//! | `$..name`       | the first `name` found by depth-first search         |
//!
//! Every query is total. A path that finds nothing, lacks the root marker or
//! has malformed brackets yields `None`, never an error, and a JSON `null`
//! that is actually present is reported as `Some(Value::Null)`.
//!
//! # Quick Start
//!
//! ```rust
//! use jsonpeek::{exists, get, size, type_of, JsonType};
//! use serde_json::json;
//!
//! let data = json!({
//!     "user": {"name": "Ada", "langs": ["en", "fr"], "manager": null}
//! });
//!
//! assert_eq!(get(&data, "$.user.langs[1]"), Some(json!("fr")));
//! assert!(exists(&data, "$.user.manager"));
//! assert!(!exists(&data, "$.user.email"));
//! assert_eq!(size(&data, Some("$.user.langs")), 2);
//! assert_eq!(type_of(&data, Some("$..name")), JsonType::String);
//!
//! // Raw JSON text works too; undecodable text simply finds nothing
//! assert_eq!(get(r#"{"n": 1}"#, "$.n"), Some(json!(1)));
//! assert_eq!(get("{broken", "$.n"), None);
//! ```
//!
//! ## Borrowed evaluation
//!
//! ```rust
//! use jsonpeek::core::evaluate;
//! use serde_json::json;
//!
//! let data = json!({"a": [1, 2, 3]});
//! let found: Option<&serde_json::Value> = evaluate(&data, "$.a[2]");
//! assert_eq!(found, Some(&json!(3)));
//! ```
//!
//! ## Reading documents
//!
//! ```rust,no_run
//! use jsonpeek::{DocumentReader, Result};
//!
//! fn main() -> Result<()> {
//!     let document = DocumentReader::new().read_file("config.yaml")?;
//!     println!("{:?}", jsonpeek::get(&document.value, "$.server.port"));
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`core`]: segmentation, navigation, evaluation and the derived queries
//! - [`io`]: decoding JSON/YAML documents and resolving file arguments
//! - [`error`]: errors for the I/O layer (the core has none)

// Public API exports
pub use crate::error::{PeekError, Result};

// Core types
pub use crate::core::query::{exists, get, get_many, size, type_of};
pub use crate::core::{
    Evaluator, EvaluatorConfig, JsonInput, JsonType, Segment, SegmentedPath, YamlJsonConverter,
};

// IO types
pub use crate::io::{
    Document, DocumentFormat, DocumentReader, FileResolver, ReaderConfig, ResolverConfig,
};

pub mod core;
pub mod error;
pub mod io;

/// Convenience functions for common operations
pub mod convenience {
    //! Convenience functions that read a file and query it in one call
    //!
    //! These use the default reader and evaluator configuration.

    pub use crate::io::convenience::*;

    use crate::{JsonType, Result};
    use serde_json::Value;
    use std::path::Path;

    /// Read a file and get the value at `jsonpath`
    pub fn get_value<P: AsRef<Path>>(path: P, jsonpath: &str) -> Result<Option<Value>> {
        let document = read_document(path)?;
        Ok(crate::get(&document.value, jsonpath))
    }

    /// Read a file and check whether `jsonpath` finds a value
    pub fn value_exists<P: AsRef<Path>>(path: P, jsonpath: &str) -> Result<bool> {
        let document = read_document(path)?;
        Ok(crate::exists(&document.value, jsonpath))
    }

    /// Read a file and report the type at `jsonpath`
    pub fn value_type<P: AsRef<Path>>(path: P, jsonpath: Option<&str>) -> Result<JsonType> {
        let document = read_document(path)?;
        Ok(crate::type_of(&document.value, jsonpath))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_end_to_end_workflow() {
        let mut temp_file = Builder::new().suffix(".yaml").tempfile().unwrap();
        let content = r#"
service:
  name: billing
  replicas: 3
  ports: [8080, 8443]
  owner: ~
"#;
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let reader = DocumentReader::new();
        let document = reader.read_file(temp_file.path()).unwrap();
        assert_eq!(document.format, DocumentFormat::Yaml);

        assert_eq!(get(&document.value, "$.service.ports[1]"), Some(json!(8443)));
        assert_eq!(get(&document.value, "$..replicas"), Some(json!(3)));
        assert!(exists(&document.value, "$.service.owner"));
        assert_eq!(size(&document.value, Some("$.service")), 4);
        assert_eq!(type_of(&document.value, Some("$.service.owner")), JsonType::Null);
    }

    #[test]
    fn test_convenience_functions() {
        let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
        temp_file
            .write_all(br#"{"title": "Convenience Test", "count": 42}"#)
            .unwrap();
        temp_file.flush().unwrap();

        assert_eq!(
            convenience::get_value(temp_file.path(), "$.count").unwrap(),
            Some(json!(42))
        );
        assert!(convenience::value_exists(temp_file.path(), "$.title").unwrap());
        assert!(!convenience::value_exists(temp_file.path(), "title").unwrap());
        assert_eq!(
            convenience::value_type(temp_file.path(), None).unwrap(),
            JsonType::Object
        );
    }

    #[test]
    fn test_error_handling() {
        let result = convenience::get_value("/nonexistent/file.json", "$");
        assert!(matches!(result, Err(PeekError::FileNotFound { .. })));
    }
}
