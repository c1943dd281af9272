//! Path navigation over nested response trees
//!
//! # Overview
//!
//! The navigation module resolves declarative [`Path`] descriptors against
//! the deeply nested, sparsely populated JSON the API returns. Two modes
//! cover every call site:
//!
//! - **required** ([`navigate`]): a miss is a structural assumption violation
//!   and fails with [`Error::PathNotFound`], carrying the full path, the
//!   offending segment and what went wrong there.
//! - **optional** ([`navigate_optional`], [`navigate_nullable`]): a miss is
//!   ordinary control flow and yields `None`. Most of the API's fields are
//!   optional by nature, so this is the common mode.
//!
//! Navigation is a pure function of `(tree, path)`: no caching, no
//! mutation, no entity-specific casing.

mod types;

pub mod paths;

pub use types::{has_key, Path, Segment};

use crate::error::{Error, PathErrorKind, Result};
use serde_json::Value;
use tracing::trace;

#[cfg(test)]
mod tests;

/// Where a resolution stopped, before it is turned into an error
struct Miss {
    depth: usize,
    kind: PathErrorKind,
}

/// Walk `path` against `root`, segment by segment.
///
/// Every (segment, node) pairing is matched exhaustively: a key applies only
/// to a mapping, an index only to a sequence, and anything else is a type
/// mismatch — distinct from a key that is simply absent.
fn resolve<'a>(root: &'a Value, path: &Path) -> std::result::Result<&'a Value, Miss> {
    let mut current = root;
    for (depth, segment) in path.iter().enumerate() {
        current = match (segment, current) {
            (Segment::Key(key), Value::Object(map)) => match map.get(key.as_ref()) {
                Some(next) => next,
                None => {
                    return Err(Miss {
                        depth,
                        kind: PathErrorKind::MissingKey,
                    })
                }
            },
            (Segment::Index(index), Value::Array(seq)) => {
                match normalize_index(*index, seq.len()) {
                    Some(idx) => &seq[idx],
                    None => {
                        return Err(Miss {
                            depth,
                            kind: PathErrorKind::IndexOutOfRange,
                        })
                    }
                }
            }
            _ => {
                return Err(Miss {
                    depth,
                    kind: PathErrorKind::TypeMismatch,
                })
            }
        };
    }
    Ok(current)
}

/// Map a possibly negative index onto a sequence of the given length
fn normalize_index(index: i64, len: usize) -> Option<usize> {
    let idx = if index < 0 {
        index.checked_add(len as i64)?
    } else {
        index
    };
    if idx >= 0 && (idx as usize) < len {
        Some(idx as usize)
    } else {
        None
    }
}

/// Resolve a required path.
///
/// Fails with [`Error::PathNotFound`] identifying the offending segment and
/// the consumed prefix when any lookup misses. An explicitly present `null`
/// terminal is a valid result.
pub fn navigate<'a>(root: &'a Value, path: &Path) -> Result<&'a Value> {
    resolve(root, path).map_err(|miss| {
        let segment = path
            .segments()
            .get(miss.depth)
            .map(ToString::to_string)
            .unwrap_or_default();
        Error::PathNotFound {
            path: path.to_string(),
            segment,
            depth: miss.depth,
            kind: miss.kind,
        }
    })
}

/// Resolve an optional path.
///
/// Returns `None` both when the path is absent and when it resolves to an
/// explicit `null` — the usual recipe form, where "field exists but is
/// empty" and "field absent entirely" are handled alike. Use
/// [`navigate_nullable`] when the distinction matters.
pub fn navigate_optional<'a>(root: &'a Value, path: &Path) -> Option<&'a Value> {
    match navigate_nullable(root, path) {
        Some(Value::Null) | None => None,
        found => found,
    }
}

/// Resolve an optional path, treating an explicit `null` terminal as valid.
///
/// Returns `None` only when the path is absent; a present `null` resolves to
/// `Some(&Value::Null)`.
pub fn navigate_nullable<'a>(root: &'a Value, path: &Path) -> Option<&'a Value> {
    match resolve(root, path) {
        Ok(found) => Some(found),
        Err(miss) => {
            trace!("optional path `{path}` stopped at segment {}", miss.depth);
            None
        }
    }
}

/// Resolve a required path to a string leaf.
///
/// A terminal that is present but not a string fails with a type-mismatch
/// [`Error::PathNotFound`] at the final segment.
pub fn navigate_str<'a>(root: &'a Value, path: &Path) -> Result<&'a str> {
    let found = navigate(root, path)?;
    found.as_str().ok_or_else(|| Error::PathNotFound {
        path: path.to_string(),
        segment: path
            .segments()
            .last()
            .map(ToString::to_string)
            .unwrap_or_default(),
        depth: path.len().saturating_sub(1),
        kind: PathErrorKind::TypeMismatch,
    })
}

/// Resolve an optional path to a string leaf
pub fn navigate_str_optional<'a>(root: &'a Value, path: &Path) -> Option<&'a str> {
    navigate_optional(root, path)?.as_str()
}

/// Find the first mapping in a sequence that contains the given key.
///
/// Returns the whole containing item, not the keyed value.
pub fn find_object_by_key<'a>(list: &'a [Value], key: &str) -> Option<&'a Value> {
    list.iter().find(|item| has_key(item, key))
}

/// Find all mappings in a sequence that contain the given key
pub fn find_objects_by_key<'a>(list: &'a [Value], key: &str) -> Vec<&'a Value> {
    list.iter().filter(|item| has_key(item, key)).collect()
}
