//! Continuation parameter types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How a continuation's items relate to the result set gathered so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContinuationKind {
    /// Items strictly append to the result set
    Next,
    /// Items replace the result set (the server re-issues the corrected
    /// full list, used by radio-style feeds)
    Reload,
}

/// Parameters for requesting the next page of a feed.
///
/// The token is opaque and single-use: it is folded into exactly one request
/// and discarded once the response arrives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestParams {
    /// Opaque server-issued continuation token
    pub token: String,
    /// Append or replace semantics for the page this token yields
    pub kind: ContinuationKind,
}

impl RequestParams {
    /// Create next-page parameters
    pub fn next(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            kind: ContinuationKind::Next,
        }
    }

    /// Create reload parameters
    pub fn reload(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            kind: ContinuationKind::Reload,
        }
    }

    /// Check if this continuation replaces the result set
    pub fn is_reload(&self) -> bool {
        self.kind == ContinuationKind::Reload
    }

    /// Query parameters to add to the page request.
    ///
    /// The server expects the token under both of its historical names.
    pub fn query_params(&self) -> HashMap<String, String> {
        let mut params = HashMap::new();
        params.insert("ctoken".to_string(), self.token.clone());
        params.insert("continuation".to_string(), self.token.clone());
        params
    }
}
