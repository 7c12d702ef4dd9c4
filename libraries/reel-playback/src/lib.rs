//! Reel - Playback and Playlist Management
//!
//! In-memory state machine behind the Reel video library.
//!
//! This crate provides:
//! - Now-playing state (stopped / playing / paused)
//! - Case-insensitive named playlists with unique entries
//! - Title and tag search
//! - Moderation flags hiding videos from discovery and playback
//! - Random play with an injectable random source
//!
//! # Architecture
//!
//! `reel-playback` never prints. Every command returns a typed result
//! (`Result<T, LibraryError>`), and `LibrarySession::execute` wraps those in
//! an `Outcome` for a presentation layer to render.
//!
//! The catalog is reached only through the `reel_core::VideoCatalog` trait.
//!
//! # Example
//!
//! ```rust
//! use reel_core::{InMemoryCatalog, Video, VideoId};
//! use reel_playback::{LibraryError, LibrarySession};
//!
//! let catalog = InMemoryCatalog::from_videos([
//!     Video::new("v1", "Cat Video", ["#cat"]),
//!     Video::new("v2", "Dog Video", ["#dog"]),
//! ])
//! .unwrap();
//!
//! let mut session = LibrarySession::with_seed(catalog, 42);
//!
//! session.play(&VideoId::new("v1")).unwrap();
//! assert!(!session.pause().unwrap().already_paused);
//! assert!(session.pause().unwrap().already_paused);
//!
//! session.create_playlist("My List").unwrap();
//! assert!(matches!(
//!     session.create_playlist("MY LIST"),
//!     Err(LibraryError::AlreadyExists { .. })
//! ));
//! ```

mod command;
mod error;
mod flags;
mod playlist;
mod random;
pub mod search;
mod session;
mod state;
pub mod types;

// Public exports
pub use command::{Command, Outcome};
pub use error::{LibraryError, Result};
pub use flags::{FlagRegistry, DEFAULT_FLAG_REASON};
pub use playlist::{Playlist, PlaylistCollection, PlaylistKey};
pub use session::LibrarySession;
pub use state::{PauseTransition, PlaybackState};
pub use types::{
    FlaggedVideo, Listing, NowPlaying, PauseOutcome, PlaybackStarted, PlaylistEntry, PlaylistView,
};
