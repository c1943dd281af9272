//! Watch-queue parsers
//!
//! The watch ("play next") queue wraps each track in a panel renderer, with
//! an optional wrapper carrying the song/video switcher counterpart.

use super::songs::{
    parse_like_status, parse_song_library_status, parse_song_menu_tokens, parse_song_runs,
};
use super::types::WatchTrack;
use super::utils::parse_thumbnails;
use crate::error::Result;
use crate::navigation::{has_key, navigate, navigate_optional, navigate_str_optional, paths};
use crate::path;
use serde_json::Value;

const PANEL_VIDEO: &str = "playlistPanelVideoRenderer";
const PANEL_VIDEO_WRAPPER: &str = "playlistPanelVideoWrapperRenderer";

/// Parse the items of a watch-queue panel.
///
/// Unplayable items and items without a recognized renderer are skipped.
pub fn parse_watch_playlist(results: &[Value]) -> Vec<WatchTrack> {
    let mut tracks = Vec::new();

    for result in results {
        let mut counterpart = None;
        let mut item = result;
        if let Some(wrapper) = result.get(PANEL_VIDEO_WRAPPER) {
            counterpart = navigate_optional(
                wrapper,
                &path!["counterpart", 0, "counterpartRenderer", PANEL_VIDEO],
            );
            match wrapper.get("primaryRenderer") {
                Some(primary) => item = primary,
                None => continue,
            }
        }

        let Some(data) = item.get(PANEL_VIDEO) else {
            continue;
        };
        if has_key(data, "unplayableText") {
            continue;
        }

        let Some(mut track) = parse_watch_track(data) else {
            continue;
        };
        track.counterpart = counterpart
            .and_then(parse_watch_track)
            .map(Box::new);
        tracks.push(track);
    }

    tracks
}

/// Parse one watch-queue track renderer.
///
/// Returns `None` when the renderer lacks the id or title every playable
/// item carries.
pub fn parse_watch_track(data: &Value) -> Option<WatchTrack> {
    let video_id = data.get("videoId").and_then(Value::as_str)?;
    let title = navigate_str_optional(data, &paths::TITLE_TEXT)?;

    let mut feedback_tokens = None;
    let mut like_status = None;
    let mut in_library = None;
    let menu_items = navigate_optional(data, &paths::MENU_ITEMS)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);
    for item in menu_items {
        let Some(toggle_menu) = item.get(paths::TOGGLE_MENU) else {
            continue;
        };
        in_library = Some(parse_song_library_status(item));
        if let Some(service) = toggle_menu.get("defaultServiceEndpoint") {
            if has_key(service, "feedbackEndpoint") {
                feedback_tokens = Some(parse_song_menu_tokens(item));
            }
            if has_key(service, "likeEndpoint") {
                like_status = parse_like_status(service);
            }
        }
    }

    let song_info = navigate_optional(data, &path!["longBylineText", "runs"])
        .and_then(Value::as_array)
        .map(|runs| parse_song_runs(runs))
        .unwrap_or_default();

    Some(WatchTrack {
        video_id: video_id.to_string(),
        title: title.to_string(),
        length: navigate_str_optional(data, &path!["lengthText", "runs", 0, "text"])
            .map(String::from),
        thumbnails: navigate_optional(data, &paths::THUMBNAIL)
            .map(parse_thumbnails)
            .unwrap_or_default(),
        feedback_tokens,
        like_status,
        in_library,
        video_type: navigate_str_optional(
            data,
            &path!["navigationEndpoint"].join(&paths::NAVIGATION_VIDEO_TYPE),
        )
        .map(String::from),
        artists: song_info.artists,
        album: song_info.album,
        views: song_info.views,
        year: song_info.year,
        duration_seconds: song_info.duration_seconds,
        counterpart: None,
    })
}

/// Browse id behind a tab of the watch-next envelope.
///
/// The tab scaffolding is a hard structural expectation, so a malformed
/// envelope fails; an unselectable tab is an ordinary `None`.
pub fn get_tab_browse_id(next_renderer: &Value, tab_index: i64) -> Result<Option<String>> {
    let tab = navigate(next_renderer, &path!["tabs", tab_index, "tabRenderer"])?;
    if has_key(tab, "unselectable") {
        return Ok(None);
    }
    let browse_id = navigate(tab, &path!["endpoint", "browseEndpoint", "browseId"])?;
    Ok(browse_id.as_str().map(String::from))
}
