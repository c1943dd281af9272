//! Playlist item parsers

use super::songs::{
    parse_song_album, parse_song_library_status, parse_song_menu_tokens, parse_track_artists,
};
use super::types::{LikeStatus, PlaylistTrack};
use super::utils::{get_fixed_column_item, get_item_text, parse_duration, parse_thumbnails};
use crate::navigation::{has_key, navigate_optional, navigate_str_optional, paths};
use crate::path;
use serde_json::Value;

/// Title value marking a row the owner deleted
const DELETED_SENTINEL: &str = "Song deleted";

/// Parse the rows of a playlist shelf, dropping sentinel rows
pub fn parse_playlist_items(results: &[Value]) -> Vec<PlaylistTrack> {
    results
        .iter()
        .filter_map(|result| result.get(paths::MRLIR))
        .filter_map(parse_playlist_item)
        .collect()
}

/// Parse one playlist row renderer.
///
/// Returns `None` for the deleted-song sentinel. Unavailable (greyed-out)
/// rows are kept with `available = false` since they still occupy a queue
/// position.
pub fn parse_playlist_item(data: &Value) -> Option<PlaylistTrack> {
    let title = if has_key(data, "menu") {
        get_item_text(data, 0)
    } else {
        None
    };
    if title == Some(DELETED_SENTINEL) {
        return None;
    }

    let mut track = PlaylistTrack {
        title: title.map(String::from),
        artists: parse_track_artists(data, 1),
        album: parse_song_album(data, 2),
        available: data.get("musicItemRendererDisplayPolicy").and_then(Value::as_str)
            != Some(paths::DISPLAY_POLICY_UNAVAILABLE),
        explicit: navigate_optional(data, &paths::BADGE_LABEL).is_some(),
        ..PlaylistTrack::default()
    };

    // rows with a menu carry their edit ids and feedback state there
    if let Some(menu_items) =
        navigate_optional(data, &paths::MENU_ITEMS).and_then(Value::as_array)
    {
        for item in menu_items {
            if let Some(menu_service) = navigate_optional(item, &paths::MENU_SERVICE) {
                if has_key(menu_service, "playlistEditEndpoint") {
                    track.set_video_id = navigate_str_optional(
                        menu_service,
                        &path!["playlistEditEndpoint", "actions", 0, "setVideoId"],
                    )
                    .map(String::from);
                    track.video_id = navigate_str_optional(
                        menu_service,
                        &path!["playlistEditEndpoint", "actions", 0, "removedVideoId"],
                    )
                    .map(String::from);
                }
            }

            if has_key(item, paths::TOGGLE_MENU) {
                track.feedback_tokens = Some(parse_song_menu_tokens(item));
                track.in_library = Some(parse_song_library_status(item));
            }
        }
    }

    // playable rows carry the video id on the play button instead
    if let Some(play) = navigate_optional(data, &paths::PLAY_BUTTON) {
        if has_key(play, "playNavigationEndpoint") {
            track.video_id = navigate_str_optional(
                play,
                &path!["playNavigationEndpoint", "watchEndpoint", "videoId"],
            )
            .map(String::from);

            if has_key(data, "menu") {
                track.like_status = navigate_str_optional(data, &paths::MENU_LIKE_STATUS)
                    .and_then(LikeStatus::from_status);
            }
        }
    }

    if let Some(column) = get_fixed_column_item(data, 0) {
        let duration_text = navigate_str_optional(column, &path!["text", "simpleText"])
            .or_else(|| navigate_str_optional(column, &path!["text", "runs", 0, "text"]));
        track.duration_seconds = duration_text.and_then(parse_duration);
    }

    if has_key(data, "thumbnail") {
        track.thumbnails = navigate_optional(data, &paths::THUMBNAILS).map(parse_thumbnails);
    }

    track.video_type = navigate_str_optional(
        data,
        &paths::MENU_ITEMS
            .join(&path![0, "menuNavigationItemRenderer", "navigationEndpoint"])
            .join(&paths::NAVIGATION_VIDEO_TYPE),
    )
    .map(String::from);

    Some(track)
}
