//! Parsed record types
//!
//! The structured records the entity parsers produce. The pagination driver
//! is agnostic to all of these; they exist for callers.

use serde::{Deserialize, Serialize};

/// A name/id pair referencing an artist, user or album
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IdName {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl IdName {
    /// Reference with a name but no browse id
    pub fn unlinked(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }
}

/// One rendition of an item's artwork
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// Tokens for adding/removing an item from the library
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeedbackTokens {
    pub add: Option<String>,
    pub remove: Option<String>,
}

/// Rating state of a track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LikeStatus {
    Like,
    Dislike,
    Indifferent,
}

impl LikeStatus {
    /// Parse the server's status string
    pub fn from_status(status: &str) -> Option<Self> {
        match status {
            "LIKE" => Some(Self::Like),
            "DISLIKE" => Some(Self::Dislike),
            "INDIFFERENT" => Some(Self::Indifferent),
            _ => None,
        }
    }
}

/// Metadata classified out of a subtitle run sequence
///
/// Subtitle runs interleave artists, an optional album link, views, duration
/// and year with separator runs; [`parse_song_runs`](super::parse_song_runs)
/// sorts them into this record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SongRuns {
    pub artists: Vec<IdName>,
    pub album: Option<IdName>,
    pub views: Option<String>,
    pub duration_seconds: Option<u64>,
    pub year: Option<String>,
}

/// A track in a watch (play) queue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchTrack {
    pub video_id: String,
    pub title: String,
    /// Display length, e.g. `"3:07"`
    pub length: Option<String>,
    pub thumbnails: Vec<Thumbnail>,
    pub feedback_tokens: Option<FeedbackTokens>,
    pub like_status: Option<LikeStatus>,
    pub in_library: Option<bool>,
    pub video_type: Option<String>,
    pub artists: Vec<IdName>,
    pub album: Option<IdName>,
    pub views: Option<String>,
    pub year: Option<String>,
    pub duration_seconds: Option<u64>,
    /// Song/video switcher counterpart, when the item carries one
    pub counterpart: Option<Box<WatchTrack>>,
}

/// A track row of a playlist
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlaylistTrack {
    pub video_id: Option<String>,
    /// Unique id of the row itself, needed for moving/removing items
    pub set_video_id: Option<String>,
    pub title: Option<String>,
    pub artists: Vec<IdName>,
    pub album: Option<IdName>,
    pub duration_seconds: Option<u64>,
    pub like_status: Option<LikeStatus>,
    pub in_library: Option<bool>,
    pub feedback_tokens: Option<FeedbackTokens>,
    pub thumbnails: Option<Vec<Thumbnail>>,
    /// False when the display policy greys the row out
    pub available: bool,
    pub explicit: bool,
    pub video_type: Option<String>,
}

/// A related-playlist card from a carousel shelf
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedPlaylist {
    pub title: String,
    pub playlist_id: Option<String>,
    pub thumbnails: Vec<Thumbnail>,
    pub description: Option<String>,
}
