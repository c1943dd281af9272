//! Path descriptor types
//!
//! A [`Path`] is declarative data: an ordered list of [`Segment`]s describing
//! where a value lives inside a response tree. Descriptors are stateless and
//! freely reusable against any number of trees; the conventional locations
//! used across the API surface live as constants in [`super::paths`].

use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::ops::Add;

/// One step of a path: a mapping key or a sequence index.
///
/// Negative indices count from the end of the sequence, so `-1` is the last
/// element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Key lookup in a mapping node
    Key(Cow<'static, str>),
    /// Index lookup in a sequence node (negative = from the end)
    Index(i64),
}

impl Segment {
    /// Create a key segment
    pub fn key(key: impl Into<Cow<'static, str>>) -> Self {
        Self::Key(key.into())
    }

    /// Create an index segment
    pub fn index(index: i64) -> Self {
        Self::Index(index)
    }
}

impl From<&'static str> for Segment {
    fn from(key: &'static str) -> Self {
        Self::Key(Cow::Borrowed(key))
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Self::Key(Cow::Owned(key))
    }
}

impl From<i64> for Segment {
    fn from(index: i64) -> Self {
        Self::Index(index)
    }
}

impl From<i32> for Segment {
    fn from(index: i32) -> Self {
        Self::Index(i64::from(index))
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Self::Index(index as i64)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

/// A reusable, declarative path into a nested response tree.
///
/// Paths compose by concatenation, so endpoint-specific descriptors are built
/// from shared fragments:
///
/// ```
/// use tunewire::path;
///
/// let tab_content = path!["tabs", 0, "tabRenderer", "content"];
/// let title_text = path!["title", "runs", 0, "text"];
/// let composed = &tab_content + &title_text;
/// assert_eq!(composed.len(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Create an empty path (resolves to the root node itself)
    pub fn new() -> Self {
        Self::default()
    }

    /// The segments of this path
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if the path is empty
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append a segment in place
    pub fn push(&mut self, segment: impl Into<Segment>) {
        self.segments.push(segment.into());
    }

    /// Concatenate two paths into a new one
    pub fn join(&self, other: &Path) -> Path {
        let mut segments = Vec::with_capacity(self.len() + other.len());
        segments.extend(self.segments.iter().cloned());
        segments.extend(other.segments.iter().cloned());
        Path { segments }
    }

    /// Iterate over the segments
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl Add<&Path> for &Path {
    type Output = Path;

    fn add(self, other: &Path) -> Path {
        self.join(other)
    }
}

impl Add<&Path> for Path {
    type Output = Path;

    fn add(mut self, other: &Path) -> Path {
        self.segments.extend(other.segments.iter().cloned());
        self
    }
}

impl Add<Path> for Path {
    type Output = Path;

    fn add(mut self, other: Path) -> Path {
        self.segments.extend(other.segments);
        self
    }
}

impl fmt::Display for Path {
    /// Dotted rendering with bracketed indices, e.g. `tabs[0].tabRenderer.content`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(key) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(key)?;
                }
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// Check whether a tree node is a mapping that contains the given key.
///
/// The response protocol often signals a variant by the mere presence of a
/// renderer key, so this shows up ahead of most lookups.
pub fn has_key(node: &Value, key: &str) -> bool {
    matches!(node, Value::Object(map) if map.contains_key(key))
}

/// Build a [`Path`] from a comma-separated list of keys and indices.
///
/// String expressions become key segments, integer expressions become index
/// segments:
///
/// ```
/// use tunewire::path;
///
/// let p = path!["continuations", 0, "nextContinuationData", "continuation"];
/// assert_eq!(p.to_string(), "continuations[0].nextContinuationData.continuation");
/// ```
#[macro_export]
macro_rules! path {
    ($($segment:expr),* $(,)?) => {
        $crate::navigation::Path::from(vec![
            $($crate::navigation::Segment::from($segment)),*
        ])
    };
}
