//! # tunewire
//!
//! Client core for an unofficial, undocumented streaming-music web API.
//! The API's responses are deeply nested, inconsistently structured, and
//! change without notice; this crate is the engine every higher-level
//! operation leans on to survive that.
//!
//! ## Features
//!
//! - **Path navigation**: declarative, composable path descriptors resolved
//!   against arbitrary response trees, with absence as ordinary control flow
//! - **Continuation paging**: server-issued continuation tokens folded into
//!   a limit-bounded, merged result sequence, including replace-style
//!   (reload) feeds
//! - **Entity parsing**: typed records for watch queues, playlist items and
//!   browse cards, with deleted/unavailable sentinels filtered out
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tunewire::pagination::Pager;
//! use tunewire::parsers::parse_playlist_items;
//! use tunewire::{navigate, navigation::paths, Result};
//!
//! fn playlist_tracks(response: &serde_json::Value, transport: &mut MyTransport) -> Result<()> {
//!     let shelf = navigate(
//!         response,
//!         &paths::SINGLE_COLUMN_TAB
//!             .join(&paths::SECTION_LIST_ITEM)
//!             .join(&tunewire::path!["musicPlaylistShelfRenderer"]),
//!     )?;
//!
//!     let tracks = Pager::new("musicPlaylistShelfContinuation")
//!         .with_limit(100)
//!         .run(shelf, transport, &mut |items: &[serde_json::Value]| {
//!             parse_playlist_items(items)
//!         })?;
//!
//!     // Process tracks
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Entity Parsers                         │
//! │  watch queue    playlist items    songs    browse cards     │
//! └──────────────────────────────┬──────────────────────────────┘
//!                                │
//! ┌──────────────────┬───────────┴──────────┬───────────────────┐
//! │    Navigation    │     Continuation     │     Pagination    │
//! ├──────────────────┼──────────────────────┼───────────────────┤
//! │ Path / Segment   │ RequestParams        │ Pager             │
//! │ navigate*        │ next / reload shapes │ PageFetcher       │
//! │ path constants   │ contents location    │ PageParser        │
//! └──────────────────┴──────────────────────┴───────────────────┘
//! ```
//!
//! Transport, auth and rate limiting live outside this crate: callers
//! inject a [`pagination::PageFetcher`] and get records back.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Path navigation over response trees
pub mod navigation;

/// Continuation token extraction
pub mod continuation;

/// Continuation-driven pagination
pub mod pagination;

/// Entity parsers and record types
pub mod parsers;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, PathErrorKind, Result, ResultExt};
pub use types::*;

// Re-export commonly used items
pub use continuation::{ContinuationKind, RequestParams};
pub use navigation::{navigate, navigate_nullable, navigate_optional, Path, Segment};
pub use pagination::{paginate, Pager};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
