//! Song metadata parsers
//!
//! Subtitle runs carry most of a track's metadata as alternating value and
//! separator runs with no schema; the classifiers here sort them out.

use super::types::{FeedbackTokens, IdName, LikeStatus, SongRuns};
use super::utils::{get_browse_id, get_flex_column_item, get_item_text, parse_duration};
use crate::navigation::{navigate_optional, navigate_str_optional, paths};
use crate::path;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Formatted count, e.g. `1.5M plays`
static VIEWS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d[^ ]* [^ ]*$").unwrap());

/// Clock duration, e.g. `3:07` or `1:02:30`
static DURATION_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+:)*\d+:\d+$").unwrap());

/// Release year
static YEAR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}$").unwrap());

/// Id and name from a single artist/user/album run
pub fn parse_id_name(run: &Value) -> IdName {
    IdName {
        id: navigate_str_optional(run, &paths::NAVIGATION_BROWSE_ID).map(String::from),
        name: run.get("text").and_then(Value::as_str).map(String::from),
    }
}

/// Parse artist references from runs, skipping separator runs.
///
/// `offset` is the index of the first artist run (2 when a leading type run
/// and separator precede the artists).
pub fn artists_from_runs(runs: &[Value], offset: usize) -> Vec<IdName> {
    runs.iter().skip(offset).step_by(2).map(parse_id_name).collect()
}

/// Classify a subtitle run sequence into song metadata.
///
/// Even-indexed runs are values, odd-indexed runs are separators. A linked
/// run is an album when its browse id says so, otherwise an artist; plain
/// text runs are matched as views, duration or year, falling back to an
/// unlinked artist.
pub fn parse_song_runs(runs: &[Value]) -> SongRuns {
    let mut parsed = SongRuns::default();

    for (i, run) in runs.iter().enumerate() {
        if i % 2 == 1 {
            continue;
        }

        if navigate_optional(run, &paths::NAVIGATION_BROWSE_ID).is_some() {
            let item = parse_id_name(run);
            let is_album = item
                .id
                .as_deref()
                .is_some_and(|id| id.starts_with("MPRE") || id.contains("release_detail"));
            if is_album {
                parsed.album = Some(item);
            } else {
                parsed.artists.push(item);
            }
            continue;
        }

        let Some(text) = run.get("text").and_then(Value::as_str) else {
            continue;
        };

        if VIEWS_REGEX.is_match(text) && i > 0 {
            parsed.views = text.split(' ').next().map(String::from);
        } else if DURATION_REGEX.is_match(text) {
            parsed.duration_seconds = parse_duration(text);
        } else if YEAR_REGEX.is_match(text) {
            parsed.year = Some(text.to_string());
        } else {
            parsed.artists.push(IdName::unlinked(text));
        }
    }

    parsed
}

/// Parse the artists column of a playlist row.
///
/// Rows that came from an album without linked artists collapse every name
/// into one run; those are split back apart on the separators the server
/// formats in.
pub fn parse_track_artists(data: &Value, index: i64) -> Vec<IdName> {
    let Some(flex_item) = get_flex_column_item(data, index) else {
        return Vec::new();
    };
    let runs = navigate_optional(flex_item, &paths::TEXT_RUNS)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    let artists = artists_from_runs(runs, 0);
    if artists.len() == 1 && artists[0].id.is_none() {
        if let Some(name) = &artists[0].name {
            return split_artist_names(name);
        }
    }
    artists
}

/// Split a combined artist string (`"A, B & C"`) into unlinked references
fn split_artist_names(combined: &str) -> Vec<IdName> {
    let Some((head, tail)) = combined.rsplit_once(" & ") else {
        return vec![IdName::unlinked(combined)];
    };
    head.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .chain(std::iter::once(tail.trim()))
        .map(IdName::unlinked)
        .collect()
}

/// Album name and browse id from a flex column
pub fn parse_song_album(data: &Value, index: i64) -> Option<IdName> {
    let flex_item = get_flex_column_item(data, index)?;
    Some(IdName {
        id: get_browse_id(flex_item, 0).map(String::from),
        name: get_item_text(data, index).map(String::from),
    })
}

/// Whether a toggle menu entry marks the song as saved to the library
pub fn parse_song_library_status(item: &Value) -> bool {
    navigate_str_optional(
        item,
        &path![paths::TOGGLE_MENU, "defaultIcon", "iconType"],
    ) == Some("LIBRARY_SAVED")
}

/// Library add/remove feedback tokens from a toggle menu entry.
///
/// The default endpoint always carries the action the menu would take next,
/// so the tokens swap roles when the song is already in the library.
pub fn parse_song_menu_tokens(item: &Value) -> FeedbackTokens {
    let toggle_menu = match item.get(paths::TOGGLE_MENU) {
        Some(menu) => menu,
        None => return FeedbackTokens::default(),
    };

    let token_at = |endpoint: &str| {
        navigate_str_optional(
            toggle_menu,
            &path![endpoint.to_string()].join(&paths::FEEDBACK_TOKEN),
        )
        .map(String::from)
    };
    let mut add = token_at("defaultServiceEndpoint");
    let mut remove = token_at("toggledServiceEndpoint");

    if parse_song_library_status(item) {
        std::mem::swap(&mut add, &mut remove);
    }

    FeedbackTokens { add, remove }
}

/// Current rating derived from a like endpoint.
///
/// The endpoint's status is the action it would apply, so the track's state
/// is the other one.
pub fn parse_like_status(service: &Value) -> Option<LikeStatus> {
    let status = navigate_str_optional(service, &path!["likeEndpoint", "status"])?;
    match status {
        "LIKE" => Some(LikeStatus::Indifferent),
        _ => Some(LikeStatus::Like),
    }
}
