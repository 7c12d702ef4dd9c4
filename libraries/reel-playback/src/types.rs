//! Success payloads returned by library session commands

use reel_core::Video;
use serde::Serialize;

/// A sequence that may be empty
///
/// The empty case is a distinct, successful outcome ("no playlists exist
/// yet", "no search results") rather than an error or a bare empty vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "items", rename_all = "snake_case")]
pub enum Listing<T> {
    /// Nothing to show
    Empty,

    /// One or more items, in display order
    Items(Vec<T>),
}

impl<T> Listing<T> {
    /// Wrap a vector, mapping no items to `Empty`
    pub fn from_vec(items: Vec<T>) -> Self {
        if items.is_empty() {
            Self::Empty
        } else {
            Self::Items(items)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn items(&self) -> &[T] {
        match self {
            Self::Empty => &[],
            Self::Items(items) => items,
        }
    }

    /// Item at a 1-based display position
    pub fn get_numbered(&self, number: usize) -> Option<&T> {
        number.checked_sub(1).and_then(|i| self.items().get(i))
    }
}

/// Video now loaded in the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NowPlaying {
    pub video: Video,
    pub paused: bool,
}

/// Result of starting playback
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaybackStarted {
    /// Video that was implicitly stopped, if any
    pub stopped: Option<Video>,

    /// Video now playing
    pub playing: Video,
}

/// Result of a pause request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PauseOutcome {
    pub video: Video,

    /// The video was already paused; nothing changed
    pub already_paused: bool,
}

/// One row of a playlist listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistEntry {
    pub video: Video,

    /// Flag reason if the video is currently flagged
    pub flag_reason: Option<String>,
}

/// Contents of a playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistView {
    /// Display name, cased as first created
    pub name: String,
    pub entries: Listing<PlaylistEntry>,
}

/// A video and the reason it was flagged
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlaggedVideo {
    pub video: Video,
    pub reason: String,
}
