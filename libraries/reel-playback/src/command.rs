//! Commands and their outcomes
//!
//! `Command` is the uniform entry point into a `LibrarySession`; each
//! variant maps to one session method. `Outcome` wraps that method's success
//! payload so a presentation layer can render any result from one match.

use crate::types::{FlaggedVideo, Listing, NowPlaying, PauseOutcome, PlaybackStarted, PlaylistView};
use reel_core::{Video, VideoId};
use serde::{Deserialize, Serialize};

/// A library command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play { video_id: VideoId },
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist { name: String },
    AddToPlaylist { playlist: String, video_id: VideoId },
    RemoveFromPlaylist { playlist: String, video_id: VideoId },
    ClearPlaylist { playlist: String },
    DeletePlaylist { playlist: String },
    ShowAllPlaylists,
    ShowPlaylist { playlist: String },
    SearchVideos { term: String },
    SearchVideosWithTag { tag: String },
    FlagVideo {
        video_id: VideoId,
        reason: Option<String>,
    },
    AllowVideo { video_id: VideoId },
}

/// Successful result of a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    VideoCount {
        count: usize,
    },
    AllVideos {
        videos: Listing<Video>,
    },
    Playing {
        started: PlaybackStarted,
    },
    Stopped {
        video: Video,
    },
    Paused {
        pause: PauseOutcome,
    },
    Continued {
        video: Video,
    },
    ShowPlaying {
        now_playing: Option<NowPlaying>,
    },
    PlaylistCreated {
        name: String,
    },
    AddedToPlaylist {
        playlist: String,
        video: Video,
    },
    RemovedFromPlaylist {
        playlist: String,
        video: Video,
    },
    PlaylistCleared {
        playlist: String,
        removed: usize,
    },
    PlaylistDeleted {
        playlist: String,
    },
    Playlists {
        names: Listing<String>,
    },
    PlaylistContents {
        view: PlaylistView,
    },
    SearchResults {
        query: String,
        results: Listing<Video>,
    },
    Flagged {
        flagged: FlaggedVideo,
    },
    Allowed {
        video: Video,
    },
}
