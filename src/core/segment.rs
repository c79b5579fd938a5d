//! Path segmentation
//!
//! Splits the part of a path that follows the root marker into the ordered
//! access steps the navigator applies. Segmentation never fails: bracket
//! content that is not a wildcard or a plain decimal index becomes a
//! [`Segment::Malformed`] step that simply resolves to nothing.

use std::fmt;

/// One atomic step of a path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Object member access like `.name`
    Field(String),
    /// Array element access like `[0]`
    Index(usize),
    /// Whole-array selection `[*]`
    Wildcard,
    /// Bracket content that is neither `*` nor a non-negative integer
    Malformed(String),
}

impl Segment {
    /// Classify the text found between `[` and `]`
    pub fn from_bracket(content: &str) -> Self {
        if content == "*" {
            return Self::Wildcard;
        }

        if content.is_empty() || !content.bytes().all(|b| b.is_ascii_digit()) {
            return Self::Malformed(content.to_string());
        }

        // All digits but wider than usize still counts as malformed
        content
            .parse::<usize>()
            .map(Self::Index)
            .unwrap_or_else(|_| Self::Malformed(content.to_string()))
    }

    /// Malformed steps never resolve to a value
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => write!(f, ".{}", name),
            Self::Index(index) => write!(f, "[{}]", index),
            Self::Wildcard => write!(f, "[*]"),
            Self::Malformed(raw) => write!(f, "[{}]", raw),
        }
    }
}

/// The segments of one path, in application order
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SegmentedPath {
    segments: Vec<Segment>,
}

impl SegmentedPath {
    /// Segment a path remainder (the text after `$` and an optional `.`)
    pub fn parse(remainder: &str) -> Self {
        Self {
            segments: segment(remainder),
        }
    }

    /// Create a path from already built segments
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Get the segments of this path
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Get the number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// An empty path selects the current value unchanged
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether any step is malformed, making the whole path unresolvable
    pub fn has_malformed(&self) -> bool {
        self.segments.iter().any(Segment::is_malformed)
    }

    /// Render back to canonical path text, rooted at `$`
    pub fn to_path_string(&self) -> String {
        let mut out = String::from("$");
        for segment in &self.segments {
            out.push_str(&segment.to_string());
        }
        out
    }
}

impl fmt::Display for SegmentedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_path_string())
    }
}

impl From<&str> for SegmentedPath {
    fn from(remainder: &str) -> Self {
        Self::parse(remainder)
    }
}

/// Tokenize a path remainder into ordered segments
///
/// Field names run until `.`, `[` or the end of input. Empty field runs are
/// skipped, so `a..b` yields the same segments as `a.b`. A bracket that is
/// never closed becomes a malformed segment holding the rest of the input.
pub fn segment(remainder: &str) -> Vec<Segment> {
    SegmentScanner::new(remainder).collect()
}

/// Internal scanner producing segments lazily
struct SegmentScanner<'a> {
    rest: &'a str,
}

impl<'a> SegmentScanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    fn scan_bracket(&mut self) -> Segment {
        // Skip '['
        let body = &self.rest[1..];
        match body.find(']') {
            Some(close) => {
                let content = &body[..close];
                self.rest = &body[close + 1..];
                Segment::from_bracket(content)
            }
            None => {
                self.rest = "";
                Segment::Malformed(body.to_string())
            }
        }
    }

    fn scan_field(&mut self) -> &'a str {
        let end = self
            .rest
            .find(|c: char| c == '.' || c == '[')
            .unwrap_or(self.rest.len());
        let (name, rest) = self.rest.split_at(end);
        self.rest = rest;
        name
    }
}

impl Iterator for SegmentScanner<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        loop {
            if self.rest.is_empty() {
                return None;
            }

            if self.rest.starts_with('[') {
                return Some(self.scan_bracket());
            }

            if let Some(stripped) = self.rest.strip_prefix('.') {
                self.rest = stripped;
                continue;
            }

            let name = self.scan_field();
            if !name.is_empty() {
                return Some(Segment::Field(name.to_string()));
            }
        }
    }
}
