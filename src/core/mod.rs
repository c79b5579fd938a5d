//! Core path evaluation
//!
//! - [`segment`]: splits a path into access steps
//! - [`navigate`]: applies one step to a value
//! - [`evaluate`]: root handling, recursive search and the derived queries
//! - [`query`]: the same operations over structured values or JSON text
//! - [`value`]: type tags, sizes and query input
//! - [`convert`]: YAML to JSON conversion for YAML documents

pub mod convert;
pub mod evaluate;
pub mod navigate;
pub mod query;
pub mod segment;
pub mod value;

pub use convert::YamlJsonConverter;
pub use evaluate::{
    evaluate, exists_in, recursive_search, size_of, type_of_value, Evaluator, EvaluatorConfig,
    PathPlan, ROOT_MARKER,
};
pub use navigate::{navigate, navigate_all};
pub use segment::{segment, Segment, SegmentedPath};
pub use value::{value_size, JsonInput, JsonType};
