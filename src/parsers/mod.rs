//! Entity parsers
//!
//! # Overview
//!
//! Pure extraction functions mapping raw item nodes to structured records.
//! Every parser follows the same contract: one raw item in, one record or
//! nothing out. `None` covers the sentinel shapes the server uses for
//! deleted and unavailable items, so page-level wrappers filter rather than
//! fail.
//!
//! These are the only clients of the navigation and pagination engines; the
//! engines know nothing about the records produced here.

mod types;

pub mod browsing;
pub mod playlists;
pub mod songs;
pub mod utils;
pub mod watch;

pub use browsing::{parse_content_list, parse_related_playlist};
pub use playlists::{parse_playlist_item, parse_playlist_items};
pub use songs::{
    artists_from_runs, parse_id_name, parse_like_status, parse_song_album,
    parse_song_library_status, parse_song_menu_tokens, parse_song_runs, parse_track_artists,
};
pub use types::{
    FeedbackTokens, IdName, LikeStatus, PlaylistTrack, RelatedPlaylist, SongRuns, Thumbnail,
    WatchTrack,
};
pub use watch::{get_tab_browse_id, parse_watch_playlist, parse_watch_track};
