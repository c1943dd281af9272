//! Continuation-driven pagination
//!
//! # Overview
//!
//! The driver turns a first-page container plus an injected transport
//! callback into a limit-bounded, merged record sequence:
//!
//! 1. parse the items the initial container already carries;
//! 2. while the limit is unmet and a continuation is present: fetch the next
//!    raw container, locate the fresh items and continuation under the
//!    endpoint's `continuationContents` field name, parse, and append — or
//!    replace everything gathered so far when a reload continuation arrives
//!    on a reloadable feed.
//!
//! The limit is checked at the top of the loop and never triggers a
//! speculative fetch. The last fetched page is appended whole, so callers
//! may receive slightly more than `limit` items; partial pages are never
//! discarded. A transport failure propagates as-is and the accumulator is
//! dropped with it — pagination is all-or-nothing per call.

mod types;

pub use types::{Limit, PageFetcher, PageParser};

use crate::continuation::{continuation_contents, extract_continuation_params};
use crate::error::Result;
use crate::navigation::navigate_optional;
use crate::path;
use serde_json::Value;
use tracing::debug;

#[cfg(test)]
mod tests;

/// Pagination driver for one feed.
///
/// `continuation_key` names the `continuationContents` entry the endpoint
/// uses for its envelope (the protocol reuses one generic envelope under a
/// different field name per endpoint, e.g. `musicPlaylistShelfContinuation`
/// or `playlistPanelContinuation`).
///
/// ```
/// use serde_json::json;
/// use tunewire::pagination::Pager;
/// use tunewire::Result;
///
/// let first_page = json!({ "contents": [ { "id": "a" } ] });
/// let mut fetch = |_params: &tunewire::RequestParams| -> Result<serde_json::Value> {
///     unreachable!("no continuation in the first page")
/// };
/// let mut parse = |items: &[serde_json::Value]| -> Vec<String> {
///     items.iter().filter_map(|i| i["id"].as_str().map(String::from)).collect()
/// };
///
/// let ids = Pager::new("musicShelfContinuation")
///     .with_limit(25)
///     .run(&first_page, &mut fetch, &mut parse)?;
/// assert_eq!(ids, vec!["a".to_string()]);
/// # Ok::<(), tunewire::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Pager<'a> {
    /// Envelope field name holding this endpoint's continuation container
    continuation_key: &'a str,
    /// Stop once this many items are gathered; `None` runs to exhaustion
    limit: Limit,
    /// Honor reload continuations by replacing the gathered items
    reloadable: bool,
}

impl<'a> Pager<'a> {
    /// Create a driver for the given continuation envelope field
    pub fn new(continuation_key: &'a str) -> Self {
        Self {
            continuation_key,
            limit: None,
            reloadable: false,
        }
    }

    /// Set the item limit
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set or clear the item limit
    #[must_use]
    pub fn with_limit_opt(mut self, limit: Limit) -> Self {
        self.limit = limit;
        self
    }

    /// Replace the result set when the server issues a reload continuation
    #[must_use]
    pub fn reloadable(mut self) -> Self {
        self.reloadable = true;
        self
    }

    /// Run the pagination loop.
    ///
    /// `initial` is a container already holding the first page's items and,
    /// optionally, a continuation. Returns records in server order.
    pub fn run<F, P>(&self, initial: &Value, fetcher: &mut F, parser: &mut P) -> Result<Vec<P::Item>>
    where
        F: PageFetcher + ?Sized,
        P: PageParser + ?Sized,
    {
        let fresh_container = path!["continuationContents", self.continuation_key.to_string()];

        let mut items = match continuation_contents(initial) {
            Some(raw) => parser.parse_page(raw),
            None => Vec::new(),
        };
        let mut container = initial.clone();
        let mut page = 0usize;

        while self.limit.map_or(true, |limit| items.len() < limit) {
            let Some(params) = extract_continuation_params(&container) else {
                break;
            };

            let response = fetcher.fetch_page(&params)?;
            let Some(next) = navigate_optional(&response, &fresh_container) else {
                break;
            };

            let parsed = match continuation_contents(next) {
                Some(raw) => parser.parse_page(raw),
                None => break,
            };
            if parsed.is_empty() {
                break;
            }

            page += 1;
            let fetched = parsed.len();
            if self.reloadable && params.is_reload() {
                items = parsed;
            } else {
                items.extend(parsed);
            }
            debug!(
                "page {page}: fetched {fetched} items ({} gathered)",
                items.len()
            );

            container = next.clone();
        }

        Ok(items)
    }
}

/// Append-only pagination in one call.
///
/// Equivalent to `Pager::new(continuation_key).with_limit_opt(limit).run(...)`.
pub fn paginate<F, P>(
    initial: &Value,
    continuation_key: &str,
    limit: Limit,
    fetcher: &mut F,
    parser: &mut P,
) -> Result<Vec<P::Item>>
where
    F: PageFetcher + ?Sized,
    P: PageParser + ?Sized,
{
    Pager::new(continuation_key)
        .with_limit_opt(limit)
        .run(initial, fetcher, parser)
}
