//! Error types for library session commands

use reel_core::VideoId;
use thiserror::Error;

/// Library session errors
///
/// Every variant carries enough context for the presentation layer to
/// render a precise message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    /// Video id is unknown to the catalog
    #[error("Video does not exist: {0}")]
    VideoNotFound(VideoId),

    /// Command requires a current video but playback is stopped
    #[error("No video is currently playing")]
    NothingPlaying,

    /// Continue requested while the current video is playing
    #[error("Video is not paused: {0}")]
    NotPaused(VideoId),

    /// A playlist with the same case-insensitive name exists
    #[error("A playlist with the same name already exists: {existing}")]
    AlreadyExists {
        /// Name as requested
        name: String,
        /// Display name of the playlist already holding the key
        existing: String,
    },

    /// No playlist matches the name
    #[error("Playlist does not exist: {0}")]
    PlaylistNotFound(String),

    /// Video already present in the playlist
    #[error("Video {video} already added to {playlist}")]
    DuplicateEntry { playlist: String, video: VideoId },

    /// Video exists in the catalog but not in this playlist
    #[error("Video {video} is not in playlist {playlist}")]
    EntryNotInPlaylist { playlist: String, video: VideoId },

    /// Video is flagged and cannot be played or added
    #[error("Video is currently flagged (reason: {reason})")]
    VideoFlagged {
        video: VideoId,
        title: String,
        reason: String,
    },

    /// Video is already flagged
    #[error("Video is already flagged: {video}")]
    AlreadyFlagged { video: VideoId, reason: String },

    /// Video is not flagged
    #[error("Video is not flagged: {0}")]
    NotFlagged(VideoId),

    /// Nothing available to pick from
    #[error("No videos available")]
    CatalogEmpty,
}

impl LibraryError {
    /// Stable snake_case name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::VideoNotFound(_) => "video_not_found",
            Self::NothingPlaying => "nothing_playing",
            Self::NotPaused(_) => "not_paused",
            Self::AlreadyExists { .. } => "already_exists",
            Self::PlaylistNotFound(_) => "playlist_not_found",
            Self::DuplicateEntry { .. } => "duplicate_entry",
            Self::EntryNotInPlaylist { .. } => "entry_not_in_playlist",
            Self::VideoFlagged { .. } => "video_flagged",
            Self::AlreadyFlagged { .. } => "already_flagged",
            Self::NotFlagged(_) => "not_flagged",
            Self::CatalogEmpty => "catalog_empty",
        }
    }
}

/// Result type for library session operations
pub type Result<T> = std::result::Result<T, LibraryError>;
