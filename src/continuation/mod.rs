//! Continuation extraction
//!
//! # Overview
//!
//! Paginated feeds embed an opaque continuation token inside each response
//! container at a conventional location. This module normalizes the
//! historically observed envelope shapes into one [`RequestParams`] record
//! and locates the raw item list a container carries.
//!
//! A container without a continuation is the normal end of a feed, so every
//! lookup here is absence-tolerant: callers get `None`, never an error.

mod types;

pub use types::{ContinuationKind, RequestParams};

use crate::navigation::{navigate_str_optional, Path};
use crate::path;
use serde_json::Value;
use std::sync::LazyLock;


/// Append-style continuation
static NEXT_CONTINUATION: LazyLock<Path> =
    LazyLock::new(|| path!["continuations", 0, "nextContinuationData", "continuation"]);

/// Append-style continuation issued by radio queues
static NEXT_RADIO_CONTINUATION: LazyLock<Path> =
    LazyLock::new(|| path!["continuations", 0, "nextRadioContinuationData", "continuation"]);

/// Replace-style continuation
static RELOAD_CONTINUATION: LazyLock<Path> =
    LazyLock::new(|| path!["continuations", 0, "reloadContinuationData", "continuation"]);

/// Locate the continuation embedded in a container, if any.
///
/// Probes the append shapes first, then the reload shape, and tags the
/// result with the matching [`ContinuationKind`]. `None` means the feed is
/// exhausted.
pub fn extract_continuation_params(container: &Value) -> Option<RequestParams> {
    if let Some(token) = navigate_str_optional(container, &NEXT_CONTINUATION) {
        return Some(RequestParams::next(token));
    }
    if let Some(token) = navigate_str_optional(container, &NEXT_RADIO_CONTINUATION) {
        return Some(RequestParams::next(token));
    }
    navigate_str_optional(container, &RELOAD_CONTINUATION).map(RequestParams::reload)
}

/// Locate the raw item list inside a page container.
///
/// Containers carry their items under `contents` or `items` depending on the
/// endpoint envelope; both are probed in that order.
pub fn continuation_contents(container: &Value) -> Option<&[Value]> {
    for key in ["contents", "items"] {
        if let Some(items) = container.get(key).and_then(Value::as_array) {
            return Some(items);
        }
    }
    None
}
