//! Conventional path constants
//!
//! The server wraps every entity in layers of renderer envelopes whose
//! locations are stable conventions rather than documented contract. This
//! table names them once; parsers compose the fragments instead of spelling
//! nested lookups inline.
//!
//! Constants are pure data with no lifecycle beyond process start.

use super::Path;
use crate::path;
use std::sync::LazyLock;

// ============================================================================
// Renderer keys
// ============================================================================

/// List item renderer carrying most playlist/search rows
pub const MRLIR: &str = "musicResponsiveListItemRenderer";

/// Two-row item renderer carrying carousel cards
pub const MTRIR: &str = "musicTwoRowItemRenderer";

/// Toggle entry in an item menu (library / feedback actions)
pub const TOGGLE_MENU: &str = "toggleMenuServiceItemRenderer";

/// Display policy value marking an item as unavailable
pub const DISPLAY_POLICY_UNAVAILABLE: &str = "MUSIC_ITEM_RENDERER_DISPLAY_POLICY_GREY_OUT";

// ============================================================================
// Generic fragments
// ============================================================================

/// First entry of a `contents` sequence
pub static CONTENT: LazyLock<Path> = LazyLock::new(|| path!["contents", 0]);

/// Text of the first run
pub static RUN_TEXT: LazyLock<Path> = LazyLock::new(|| path!["runs", 0, "text"]);

pub static TEXT_RUNS: LazyLock<Path> = LazyLock::new(|| path!["text", "runs"]);
pub static TEXT_RUN: LazyLock<Path> = LazyLock::new(|| TEXT_RUNS.join(&path![0]));
pub static TEXT_RUN_TEXT: LazyLock<Path> = LazyLock::new(|| TEXT_RUN.join(&path!["text"]));

pub static TITLE: LazyLock<Path> = LazyLock::new(|| path!["title", "runs", 0]);
pub static TITLE_TEXT: LazyLock<Path> = LazyLock::new(|| path!["title"].join(&RUN_TEXT));
pub static DESCRIPTION: LazyLock<Path> = LazyLock::new(|| path!["description"].join(&RUN_TEXT));

pub static SUBTITLE: LazyLock<Path> = LazyLock::new(|| path!["subtitle"].join(&RUN_TEXT));
pub static SUBTITLE_RUNS: LazyLock<Path> = LazyLock::new(|| path!["subtitle", "runs"]);
/// Second non-separator subtitle run
pub static SUBTITLE2: LazyLock<Path> = LazyLock::new(|| SUBTITLE_RUNS.join(&path![2, "text"]));

// ============================================================================
// Page scaffolding
// ============================================================================

/// Content of the first tab
pub static TAB_CONTENT: LazyLock<Path> =
    LazyLock::new(|| path!["tabs", 0, "tabRenderer", "content"]);

pub static SINGLE_COLUMN: LazyLock<Path> =
    LazyLock::new(|| path!["contents", "singleColumnBrowseResultsRenderer"]);

pub static SINGLE_COLUMN_TAB: LazyLock<Path> = LazyLock::new(|| SINGLE_COLUMN.join(&TAB_CONTENT));

/// Tabbed envelope of a watch-next response
pub static WATCH_NEXT_RENDERER: LazyLock<Path> = LazyLock::new(|| {
    path![
        "contents",
        "singleColumnMusicWatchNextResultsRenderer",
        "tabbedRenderer",
        "watchNextTabbedResultsRenderer"
    ]
});

pub static SECTION_LIST: LazyLock<Path> = LazyLock::new(|| path!["sectionListRenderer", "contents"]);
pub static SECTION_LIST_ITEM: LazyLock<Path> =
    LazyLock::new(|| path!["sectionListRenderer"].join(&CONTENT));
pub static SECTION_LIST_CONTINUATION: LazyLock<Path> =
    LazyLock::new(|| path!["continuationContents", "sectionListContinuation"]);

pub static MUSIC_SHELF: LazyLock<Path> = LazyLock::new(|| path![0, "musicShelfRenderer"]);
pub static CAROUSEL: LazyLock<Path> = LazyLock::new(|| path!["musicCarouselShelfRenderer"]);
pub static CAROUSEL_TITLE: LazyLock<Path> = LazyLock::new(|| {
    path!["header", "musicCarouselShelfBasicHeaderRenderer", "title", "runs", 0]
});

// ============================================================================
// Menus and overlays
// ============================================================================

pub static MENU: LazyLock<Path> = LazyLock::new(|| path!["menu", "menuRenderer"]);
pub static MENU_ITEMS: LazyLock<Path> = LazyLock::new(|| MENU.join(&path!["items"]));
pub static MENU_LIKE_STATUS: LazyLock<Path> = LazyLock::new(|| {
    MENU.join(&path![
        "topLevelButtons",
        0,
        "likeButtonRenderer",
        "likeStatus"
    ])
});
pub static MENU_SERVICE: LazyLock<Path> =
    LazyLock::new(|| path!["menuServiceItemRenderer", "serviceEndpoint"]);

pub static PLAY_BUTTON: LazyLock<Path> = LazyLock::new(|| {
    path![
        "overlay",
        "musicItemThumbnailOverlayRenderer",
        "content",
        "musicPlayButtonRenderer"
    ]
});

/// Badge accessibility label (presence marks an explicit item)
pub static BADGE_LABEL: LazyLock<Path> = LazyLock::new(|| {
    path![
        "badges",
        0,
        "musicInlineBadgeRenderer",
        "accessibilityData",
        "accessibilityData",
        "label"
    ]
});

// ============================================================================
// Navigation endpoints
// ============================================================================

pub static NAVIGATION_BROWSE: LazyLock<Path> =
    LazyLock::new(|| path!["navigationEndpoint", "browseEndpoint"]);
pub static NAVIGATION_BROWSE_ID: LazyLock<Path> =
    LazyLock::new(|| NAVIGATION_BROWSE.join(&path!["browseId"]));

/// Page type of a browse endpoint (album, artist, playlist, ...)
pub static PAGE_TYPE: LazyLock<Path> = LazyLock::new(|| {
    path![
        "browseEndpointContextSupportedConfigs",
        "browseEndpointContextMusicConfig",
        "pageType"
    ]
});

pub static NAVIGATION_PLAYLIST_ID: LazyLock<Path> =
    LazyLock::new(|| path!["navigationEndpoint", "watchEndpoint", "playlistId"]);
pub static NAVIGATION_WATCH_PLAYLIST_ID: LazyLock<Path> =
    LazyLock::new(|| path!["navigationEndpoint", "watchPlaylistEndpoint", "playlistId"]);

/// Video type inside a watch endpoint (relative to the endpoint node)
pub static NAVIGATION_VIDEO_TYPE: LazyLock<Path> = LazyLock::new(|| {
    path![
        "watchEndpoint",
        "watchEndpointMusicSupportedConfigs",
        "watchEndpointMusicConfig",
        "musicVideoType"
    ]
});

// ============================================================================
// Thumbnails and tokens
// ============================================================================

pub static THUMBNAIL: LazyLock<Path> = LazyLock::new(|| path!["thumbnail", "thumbnails"]);
pub static THUMBNAILS: LazyLock<Path> =
    LazyLock::new(|| path!["thumbnail", "musicThumbnailRenderer"].join(&THUMBNAIL));
pub static THUMBNAIL_RENDERER: LazyLock<Path> =
    LazyLock::new(|| path!["thumbnailRenderer", "musicThumbnailRenderer"].join(&THUMBNAIL));
pub static THUMBNAIL_CROPPED: LazyLock<Path> =
    LazyLock::new(|| path!["thumbnail", "croppedSquareThumbnailRenderer"].join(&THUMBNAIL));

pub static FEEDBACK_TOKEN: LazyLock<Path> =
    LazyLock::new(|| path!["feedbackEndpoint", "feedbackToken"]);
