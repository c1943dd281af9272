//! Common types used throughout tunewire
//!
//! Shared type aliases used across multiple modules.

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Maximum item count for a pagination call; `None` means unbounded.
///
/// The limit is a floor for stopping, not a ceiling on the result: the last
/// fetched page is always returned whole, so callers may receive slightly
/// more than `limit` items.
pub type Limit = Option<usize>;
