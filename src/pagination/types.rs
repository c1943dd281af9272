//! Pagination strategy traits
//!
//! The driver owns only control flow; fetching a page and turning raw items
//! into records are injected strategies. Blanket impls let plain closures
//! satisfy both, so call sites stay as light as the driver's contract allows.

use crate::continuation::RequestParams;
use crate::error::Result;
use serde_json::Value;

pub use crate::types::Limit;

/// Transport collaborator: performs one page request.
///
/// Implementations must surface transport/auth failures as
/// [`Error::Transport`](crate::Error::Transport),
/// [`Error::HttpStatus`](crate::Error::HttpStatus) or
/// [`Error::Auth`](crate::Error::Auth) so the driver can propagate them
/// without mistaking them for an exhausted feed.
pub trait PageFetcher {
    /// Send one page request for the given continuation and return the raw
    /// response tree
    fn fetch_page(&mut self, params: &RequestParams) -> Result<Value>;
}

impl<F> PageFetcher for F
where
    F: FnMut(&RequestParams) -> Result<Value>,
{
    fn fetch_page(&mut self, params: &RequestParams) -> Result<Value> {
        self(params)
    }
}

/// Extraction strategy: maps one page's raw items to parsed records.
///
/// Parsers drop unavailable/deleted sentinel items, so a page of `n` raw
/// items may yield fewer than `n` records.
pub trait PageParser {
    /// Parsed record type
    type Item;

    /// Parse one page's raw item list
    fn parse_page(&mut self, items: &[Value]) -> Vec<Self::Item>;
}

impl<F, T> PageParser for F
where
    F: FnMut(&[Value]) -> Vec<T>,
{
    type Item = T;

    fn parse_page(&mut self, items: &[Value]) -> Vec<T> {
        self(items)
    }
}
