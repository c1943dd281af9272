//! Shared parsing helpers
//!
//! Column access on list-item renderers and the small text-format parsers
//! used across entity parsers.

use super::types::Thumbnail;
use crate::navigation::{has_key, navigate_optional, navigate_str_optional, paths};
use crate::path;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Matches spelled-out durations like `1 hour, 3 minutes, 20 seconds`
static LONG_DURATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:(\d+) hour)?(?:, )?(?:(\d+) minutes)?(?:, )?(?:(\d+) seconds)?").unwrap()
});

/// Get a flex column of a list-item renderer.
///
/// Returns `None` unless the column exists and carries text runs.
pub fn get_flex_column_item(item: &Value, index: i64) -> Option<&Value> {
    let column = navigate_optional(
        item,
        &path![
            "flexColumns",
            index,
            "musicResponsiveListItemFlexColumnRenderer"
        ],
    )?;
    navigate_optional(column, &paths::TEXT_RUNS).map(|_| column)
}

/// Get a fixed column of a list-item renderer
pub fn get_fixed_column_item(item: &Value, index: i64) -> Option<&Value> {
    let column = navigate_optional(
        item,
        &path![
            "fixedColumns",
            index,
            "musicResponsiveListItemFixedColumnRenderer"
        ],
    )?;
    if has_key(column.get("text")?, "runs") || has_key(column.get("text")?, "simpleText") {
        Some(column)
    } else {
        None
    }
}

/// Text of the first run of a flex column
pub fn get_item_text(item: &Value, index: i64) -> Option<&str> {
    let column = get_flex_column_item(item, index)?;
    navigate_str_optional(column, &paths::TEXT_RUN_TEXT)
}

/// Browse id attached to a text run of a column
pub fn get_browse_id(item: &Value, run_index: i64) -> Option<&str> {
    let run = navigate_optional(item, &path!["text", "runs", run_index])?;
    navigate_str_optional(run, &paths::NAVIGATION_BROWSE_ID)
}

/// Convert a thumbnail list node into typed records.
///
/// Malformed entries are dropped rather than failing the whole item.
pub fn parse_thumbnails(node: &Value) -> Vec<Thumbnail> {
    node.as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Parse a duration into seconds.
///
/// Accepts clock strings (`3:07`, `1:02:30`) and the spelled-out form used
/// in headers (`6 minutes, 31 seconds`).
pub fn parse_duration(duration: &str) -> Option<u64> {
    if duration.contains(':') {
        let mut seconds: u64 = 0;
        for (multiplier, part) in [1u64, 60, 3600].iter().zip(duration.rsplit(':')) {
            seconds += multiplier * part.trim().parse::<u64>().ok()?;
        }
        return Some(seconds);
    }

    if duration.contains("seconds") || duration.contains("minutes") || duration.contains("hour") {
        let captures = LONG_DURATION_REGEX.captures(duration)?;
        let part = |i: usize| captures.get(i).and_then(|m| m.as_str().parse::<u64>().ok());
        let (hours, minutes, seconds) = (part(1), part(2), part(3));
        if hours.is_none() && minutes.is_none() && seconds.is_none() {
            return None;
        }
        return Some(
            hours.unwrap_or(0) * 3600 + minutes.unwrap_or(0) * 60 + seconds.unwrap_or(0),
        );
    }

    None
}

/// Pull an integer out of a formatted count run (views, plays, subscribers).
///
/// Handles magnitude suffixes (`1.5M`) and thousands separators (`12,345`).
pub fn parse_real_count(text: &str) -> Option<i64> {
    let count = text.split(' ').next()?;
    for (suffix, magnitude) in [("K", 1_000i64), ("M", 1_000_000), ("B", 1_000_000_000)] {
        if count.contains(suffix) {
            let base: f64 = count.replace(suffix, "").parse().ok()?;
            return Some((base * magnitude as f64) as i64);
        }
    }
    count.replace(',', "").parse().ok()
}
