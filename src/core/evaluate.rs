//! Path evaluation over borrowed JSON values
//!
//! Evaluation is total. A path that is empty, lacks the `$` root marker,
//! contains malformed brackets or walks off the data resolves to `None`.
//! `Some(&Value::Null)` means a JSON null was found, which is not the same
//! thing.
//!
//! Supported forms:
//! - `$` - the root value
//! - `$.field.subfield` - nested member access
//! - `$.array[0]` - array element access
//! - `$.array[*]` - the whole array
//! - `$..field` - first `field` found by depth-first pre-order search

use crate::core::navigate::navigate_all;
use crate::core::segment::SegmentedPath;
use crate::core::value::{value_size, JsonType};
use log::trace;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

/// The root marker every path starts with
pub const ROOT_MARKER: char = '$';

/// How a path string is resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPlan {
    /// Empty, or not starting with `$`; finds nothing
    Unrooted,
    /// `$` on its own; selects the data unchanged
    Root,
    /// `$..field`; the rest of the path is one field name
    RecursiveSearch(String),
    /// Everything else, applied segment by segment
    Navigate(SegmentedPath),
}

impl PathPlan {
    /// Run the plan against `data`
    pub fn execute<'a>(&self, data: &'a Value) -> Option<&'a Value> {
        match self {
            Self::Unrooted => None,
            Self::Root => Some(data),
            Self::RecursiveSearch(field) => recursive_search(data, field),
            Self::Navigate(path) => navigate_all(data, path.segments()),
        }
    }
}

impl fmt::Display for PathPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrooted => write!(f, "unrooted path"),
            Self::Root => write!(f, "root"),
            Self::RecursiveSearch(field) => write!(f, "recursive search for {:?}", field),
            Self::Navigate(path) => write!(f, "{} ({} segment(s))", path, path.len()),
        }
    }
}

/// Configuration for path evaluation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluatorConfig {
    /// Treat paths without a leading `$` as rooted (`name` becomes `$.name`,
    /// `[0]` becomes `$[0]`). Off by default, in which case such paths find
    /// nothing.
    pub auto_root: bool,
}

/// Path evaluator carrying an [`EvaluatorConfig`]
///
/// Holds no state between calls; every query parses its path from scratch.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    /// Create an evaluator with the default, strict configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an evaluator with custom configuration
    pub fn with_config(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    /// Get the evaluator configuration
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Work out how `path` will be resolved, without touching any data
    pub fn plan(&self, path: &str) -> PathPlan {
        let Some(path) = self.rooted(path) else {
            return PathPlan::Unrooted;
        };
        let Some(rest) = path.strip_prefix(ROOT_MARKER) else {
            return PathPlan::Unrooted;
        };
        let rest = rest.strip_prefix('.').unwrap_or(rest);

        if rest.is_empty() {
            return PathPlan::Root;
        }

        if let Some(field) = rest.strip_prefix('.') {
            return PathPlan::RecursiveSearch(field.to_string());
        }

        PathPlan::Navigate(SegmentedPath::parse(rest))
    }

    /// Resolve `path` against `data`
    pub fn evaluate<'a>(&self, data: &'a Value, path: &str) -> Option<&'a Value> {
        let plan = self.plan(path);
        trace!("evaluating {:?} as {}", path, plan);
        plan.execute(data)
    }

    /// Whether `path` finds a value, a JSON null included
    pub fn exists(&self, data: &Value, path: &str) -> bool {
        self.evaluate(data, path).is_some()
    }

    /// Size of the value at `path`, or of `data` itself when no path is given
    ///
    /// An empty path counts as no path.
    pub fn size(&self, data: &Value, path: Option<&str>) -> usize {
        value_size(self.target(data, path))
    }

    /// Type of the value at `path`, or of `data` itself when no path is given
    pub fn type_of(&self, data: &Value, path: Option<&str>) -> JsonType {
        JsonType::of(self.target(data, path))
    }

    fn target<'a>(&self, data: &'a Value, path: Option<&str>) -> Option<&'a Value> {
        match path {
            Some(path) if !path.is_empty() => self.evaluate(data, path),
            _ => Some(data),
        }
    }

    /// Apply auto-rooting; `None` for an empty path
    fn rooted<'p>(&self, path: &'p str) -> Option<Cow<'p, str>> {
        if path.is_empty() {
            return None;
        }

        if path.starts_with(ROOT_MARKER) || !self.config.auto_root {
            return Some(Cow::Borrowed(path));
        }

        let prefixed = if path.starts_with('[') {
            format!("{}{}", ROOT_MARKER, path)
        } else {
            format!("{}.{}", ROOT_MARKER, path)
        };
        trace!("auto-rooted {:?} to {:?}", path, prefixed);
        Some(Cow::Owned(prefixed))
    }
}

/// Resolve `path` against `data` with the default configuration
pub fn evaluate<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    Evaluator::new().evaluate(data, path)
}

/// Whether `path` finds a value in `data`
pub fn exists_in(data: &Value, path: &str) -> bool {
    Evaluator::new().exists(data, path)
}

/// Size of the value at `path` (or of `data`)
pub fn size_of(data: &Value, path: Option<&str>) -> usize {
    Evaluator::new().size(data, path)
}

/// Type of the value at `path` (or of `data`)
pub fn type_of_value(data: &Value, path: Option<&str>) -> JsonType {
    Evaluator::new().type_of(data, path)
}

/// Depth-first pre-order search for the first object holding `field`
///
/// An object's own keys are checked before any of its children, and children
/// are visited in iteration order. The first hit wins, including a JSON null.
/// Uses an explicit work stack, so document depth does not grow the call
/// stack.
pub fn recursive_search<'a>(data: &'a Value, field: &str) -> Option<&'a Value> {
    let mut pending: Vec<&'a Value> = vec![data];

    while let Some(node) = pending.pop() {
        match node {
            Value::Object(map) => {
                if let Some(found) = map.get(field) {
                    return Some(found);
                }
                pending.extend(map.values().rev());
            }
            Value::Array(items) => pending.extend(items.iter().rev()),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
        }
    }

    None
}
