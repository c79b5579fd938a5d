//! Single-step navigation over JSON values

use crate::core::segment::Segment;
use log::trace;
use serde_json::Value;

/// Apply one segment to the current value
///
/// `None` on input stays `None`. A wildcard keeps the whole array instead of
/// fanning out, so any field or index step after it is applied to the array
/// itself.
pub fn navigate<'a>(current: Option<&'a Value>, segment: &Segment) -> Option<&'a Value> {
    let current = current?;

    match segment {
        Segment::Field(name) => match current {
            Value::Object(map) => map.get(name),
            _ => None,
        },
        Segment::Index(index) => match current {
            Value::Array(items) => items.get(*index),
            _ => None,
        },
        Segment::Wildcard => match current {
            Value::Array(_) => Some(current),
            _ => None,
        },
        Segment::Malformed(_) => None,
    }
}

/// Fold [`navigate`] over `segments`, starting from `data`
///
/// Stops at the first step that resolves to nothing; the remaining segments
/// are never looked at.
pub fn navigate_all<'a>(data: &'a Value, segments: &[Segment]) -> Option<&'a Value> {
    let mut current = data;

    for (position, segment) in segments.iter().enumerate() {
        match navigate(Some(current), segment) {
            Some(next) => current = next,
            None => {
                trace!(
                    "segment {} ({}) resolved to nothing, skipping {} remaining",
                    position,
                    segment,
                    segments.len() - position - 1
                );
                return None;
            }
        }
    }

    Some(current)
}
