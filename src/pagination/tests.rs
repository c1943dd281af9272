//! Tests for the pagination driver

use super::*;
use crate::continuation::RequestParams;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::collections::VecDeque;

/// Fetcher that replays a scripted sequence of responses and records the
/// tokens it was asked for.
struct ScriptedFetcher {
    responses: VecDeque<Value>,
    tokens_seen: Vec<String>,
}

impl ScriptedFetcher {
    fn new(responses: Vec<Value>) -> Self {
        Self {
            responses: responses.into(),
            tokens_seen: Vec::new(),
        }
    }

    fn calls(&self) -> usize {
        self.tokens_seen.len()
    }
}

impl PageFetcher for ScriptedFetcher {
    fn fetch_page(&mut self, params: &RequestParams) -> crate::Result<Value> {
        self.tokens_seen.push(params.token.clone());
        self.responses
            .pop_front()
            .ok_or_else(|| Error::transport("scripted fetcher ran dry"))
    }
}

/// Parse items of the form `{"id": "..."}`, dropping anything marked deleted.
fn parse_ids(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter(|item| item["deleted"] != json!(true))
        .filter_map(|item| item["id"].as_str().map(String::from))
        .collect()
}

fn shelf(ids: &[&str], continuation: Option<Value>) -> Value {
    let items: Vec<Value> = ids.iter().map(|id| json!({ "id": id })).collect();
    match continuation {
        Some(data) => json!({ "contents": items, "continuations": [data] }),
        None => json!({ "contents": items }),
    }
}

fn next_data(token: &str) -> Value {
    json!({ "nextContinuationData": { "continuation": token } })
}

fn envelope(key: &str, container: Value) -> Value {
    json!({ "continuationContents": { key: container } })
}

const KEY: &str = "musicShelfContinuation";

// ============================================================================
// Limit handling
// ============================================================================

#[test]
fn test_limit_zero_issues_no_fetches() {
    let initial = shelf(&["a", "b", "c"], Some(next_data("t1")));
    let mut fetcher = ScriptedFetcher::new(vec![]);

    let items = Pager::new(KEY)
        .with_limit(0)
        .run(&initial, &mut fetcher, &mut parse_ids)
        .unwrap();

    // the seed page is returned whole, but nothing is fetched
    assert_eq!(items, vec!["a", "b", "c"]);
    assert_eq!(fetcher.calls(), 0);
}

#[test]
fn test_limit_met_by_first_page_issues_no_fetches() {
    let initial = shelf(&["a", "b", "c"], Some(next_data("t1")));
    let mut fetcher = ScriptedFetcher::new(vec![]);

    let items = Pager::new(KEY)
        .with_limit(3)
        .run(&initial, &mut fetcher, &mut parse_ids)
        .unwrap();

    assert_eq!(items.len(), 3);
    assert_eq!(fetcher.calls(), 0);
}

#[test]
fn test_overfetch_returns_last_page_whole() {
    // 3 items + continuation "abc"; the follow-up page brings 2 more and no
    // continuation; limit 4 -> 5 items, exactly one follow-up call
    let initial = shelf(&["a", "b", "c"], Some(next_data("abc")));
    let mut fetcher = ScriptedFetcher::new(vec![envelope(KEY, shelf(&["d", "e"], None))]);

    let items = Pager::new(KEY)
        .with_limit(4)
        .run(&initial, &mut fetcher, &mut parse_ids)
        .unwrap();

    assert_eq!(items, vec!["a", "b", "c", "d", "e"]);
    assert_eq!(fetcher.calls(), 1);
    assert_eq!(fetcher.tokens_seen, vec!["abc"]);
}

#[test]
fn test_no_fetch_beyond_limit_even_if_continuation_remains() {
    let initial = shelf(&["a", "b"], Some(next_data("t1")));
    let mut fetcher = ScriptedFetcher::new(vec![
        envelope(KEY, shelf(&["c", "d"], Some(next_data("t2")))),
        envelope(KEY, shelf(&["e", "f"], Some(next_data("t3")))),
    ]);

    let items = Pager::new(KEY)
        .with_limit(4)
        .run(&initial, &mut fetcher, &mut parse_ids)
        .unwrap();

    // limit satisfied after the first follow-up; t2 is never requested
    assert_eq!(items, vec!["a", "b", "c", "d"]);
    assert_eq!(fetcher.calls(), 1);
}

// ============================================================================
// Exhaustion
// ============================================================================

#[test]
fn test_unbounded_drains_continuation_chain_in_order() {
    let initial = shelf(&["a"], Some(next_data("t1")));
    let mut fetcher = ScriptedFetcher::new(vec![
        envelope(KEY, shelf(&["b"], Some(next_data("t2")))),
        envelope(KEY, shelf(&["c"], Some(next_data("t3")))),
        envelope(KEY, shelf(&["d"], None)),
    ]);

    let items = paginate(&initial, KEY, None, &mut fetcher, &mut parse_ids).unwrap();

    assert_eq!(items, vec!["a", "b", "c", "d"]);
    assert_eq!(fetcher.calls(), 3);
    assert_eq!(fetcher.tokens_seen, vec!["t1", "t2", "t3"]);
}

#[test]
fn test_initial_page_without_continuation_terminates_immediately() {
    let initial = shelf(&["a", "b"], None);
    let mut fetcher = ScriptedFetcher::new(vec![]);

    let items = paginate(&initial, KEY, None, &mut fetcher, &mut parse_ids).unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(fetcher.calls(), 0);
}

#[test]
fn test_missing_envelope_terminates() {
    let initial = shelf(&["a"], Some(next_data("t1")));
    // response lacks continuationContents entirely
    let mut fetcher = ScriptedFetcher::new(vec![json!({ "responseContext": {} })]);

    let items = paginate(&initial, KEY, None, &mut fetcher, &mut parse_ids).unwrap();

    assert_eq!(items, vec!["a"]);
    assert_eq!(fetcher.calls(), 1);
}

#[test]
fn test_empty_parsed_page_terminates() {
    let initial = shelf(&["a"], Some(next_data("t1")));
    // the follow-up still advertises a continuation, but every item is a
    // deletion sentinel; the loop must stop rather than spin
    let all_deleted = json!({
        "contents": [ { "id": "x", "deleted": true } ],
        "continuations": [ next_data("t2") ]
    });
    let mut fetcher = ScriptedFetcher::new(vec![envelope(KEY, all_deleted)]);

    let items = paginate(&initial, KEY, None, &mut fetcher, &mut parse_ids).unwrap();

    assert_eq!(items, vec!["a"]);
    assert_eq!(fetcher.calls(), 1);
}

#[test]
fn test_initial_container_without_items_still_pages() {
    // a shelf seeded only with a continuation (no first-page items)
    let initial = json!({ "continuations": [ next_data("t1") ] });
    let mut fetcher = ScriptedFetcher::new(vec![envelope(KEY, shelf(&["a", "b"], None))]);

    let items = paginate(&initial, KEY, None, &mut fetcher, &mut parse_ids).unwrap();

    assert_eq!(items, vec!["a", "b"]);
    assert_eq!(fetcher.calls(), 1);
}

// ============================================================================
// Sentinel filtering
// ============================================================================

#[test]
fn test_sentinel_items_are_excluded_without_stalling() {
    let initial = json!({
        "contents": [
            { "id": "a" },
            { "id": "gone", "deleted": true },
            { "id": "b" }
        ],
        "continuations": [ next_data("t1") ]
    });
    let mut fetcher = ScriptedFetcher::new(vec![envelope(KEY, shelf(&["c"], None))]);

    let items = paginate(&initial, KEY, None, &mut fetcher, &mut parse_ids).unwrap();

    // three raw items in, two records out, and the page still advanced
    assert_eq!(items, vec!["a", "b", "c"]);
}

// ============================================================================
// Reload semantics
// ============================================================================

fn reload_data(token: &str) -> Value {
    json!({ "reloadContinuationData": { "continuation": token } })
}

#[test]
fn test_reload_replaces_accumulator_when_reloadable() {
    let initial = shelf(&["a", "b"], Some(reload_data("r1")));
    let mut fetcher = ScriptedFetcher::new(vec![envelope(KEY, shelf(&["x", "y", "z"], None))]);

    let items = Pager::new(KEY)
        .reloadable()
        .with_limit(10)
        .run(&initial, &mut fetcher, &mut parse_ids)
        .unwrap();

    // the corrected full list replaces page one
    assert_eq!(items, vec!["x", "y", "z"]);
    assert_eq!(fetcher.calls(), 1);
}

#[test]
fn test_reload_appends_when_not_reloadable() {
    let initial = shelf(&["a"], Some(reload_data("r1")));
    let mut fetcher = ScriptedFetcher::new(vec![envelope(KEY, shelf(&["b"], None))]);

    let items = Pager::new(KEY)
        .run(&initial, &mut fetcher, &mut parse_ids)
        .unwrap();

    assert_eq!(items, vec!["a", "b"]);
}

#[test]
fn test_next_continuation_appends_on_reloadable_feed() {
    let initial = shelf(&["a"], Some(next_data("t1")));
    let mut fetcher = ScriptedFetcher::new(vec![envelope(KEY, shelf(&["b"], None))]);

    let items = Pager::new(KEY)
        .reloadable()
        .run(&initial, &mut fetcher, &mut parse_ids)
        .unwrap();

    assert_eq!(items, vec!["a", "b"]);
}

// ============================================================================
// Failure semantics
// ============================================================================

#[test]
fn test_transport_failure_discards_accumulator() {
    let initial = shelf(&["a", "b"], Some(next_data("t1")));
    let mut fetch =
        |_: &RequestParams| -> crate::Result<Value> { Err(Error::http_status(401, "expired")) };

    let result = paginate(&initial, KEY, None, &mut fetch, &mut parse_ids);

    // no partial result: the error carries through unchanged
    let err = result.unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.to_string(), "HTTP 401: expired");
}

// ============================================================================
// Builder
// ============================================================================

#[test]
fn test_pager_builder_defaults() {
    let pager = Pager::new(KEY);
    let initial = shelf(&[], None);
    let mut fetcher = ScriptedFetcher::new(vec![]);

    // unbounded, append-only by default; empty feed yields empty result
    let items = pager.run(&initial, &mut fetcher, &mut parse_ids).unwrap();
    assert!(items.is_empty());
    assert_eq!(fetcher.calls(), 0);
}
