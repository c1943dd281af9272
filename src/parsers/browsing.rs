//! Browse-page parsers

use super::types::RelatedPlaylist;
use super::utils::parse_thumbnails;
use crate::navigation::{navigate_optional, navigate_str_optional, paths};
use serde_json::Value;

/// Parse a list of carded items, unwrapping each card's renderer key.
///
/// The per-item parser decides the record type; cards without the renderer
/// key or that fail to parse are dropped.
pub fn parse_content_list<T>(
    results: &[Value],
    key: &str,
    parse: impl Fn(&Value) -> Option<T>,
) -> Vec<T> {
    results
        .iter()
        .filter_map(|result| result.get(key))
        .filter_map(|data| parse(data))
        .collect()
}

/// Parse one related-playlist card
pub fn parse_related_playlist(data: &Value) -> Option<RelatedPlaylist> {
    let title = navigate_str_optional(data, &paths::TITLE_TEXT)?;
    let playlist_id = navigate_str_optional(data, &paths::TITLE.join(&paths::NAVIGATION_BROWSE_ID))
        .map(|id| id.trim_start_matches("VL").to_string());

    Some(RelatedPlaylist {
        title: title.to_string(),
        playlist_id,
        thumbnails: navigate_optional(data, &paths::THUMBNAIL_RENDERER)
            .map(parse_thumbnails)
            .unwrap_or_default(),
        description: navigate_str_optional(data, &paths::SUBTITLE).map(String::from),
    })
}
