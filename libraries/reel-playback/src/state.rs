//! Now-playing state machine
//!
//! ```text
//!             start            pause
//!  Stopped ─────────▶ Playing ───────▶ Paused
//!     ▲                 │  ▲   resume    │
//!     │      stop       │  └────────────┘
//!     └─────────────────┴────────────────┘
//! ```
//!
//! `start` is legal from every state and replaces whatever was current.

use crate::error::{LibraryError, Result};
use reel_core::VideoId;
use serde::{Deserialize, Serialize};

/// Playback state
///
/// Paused-while-stopped is unrepresentable: the paused flag only exists
/// alongside a current video.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Nothing loaded
    #[default]
    Stopped,

    /// Video is playing
    Playing(VideoId),

    /// Video is paused mid-play
    Paused(VideoId),
}

/// Result of a pause request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PauseTransition {
    /// Playing -> Paused
    Paused(VideoId),

    /// Already paused; state unchanged
    AlreadyPaused(VideoId),
}

impl PlaybackState {
    /// Make `id` the playing video
    ///
    /// Returns the previously current video, which has been implicitly
    /// stopped.
    pub fn start(&mut self, id: VideoId) -> Option<VideoId> {
        match std::mem::replace(self, Self::Playing(id)) {
            Self::Stopped => None,
            Self::Playing(previous) | Self::Paused(previous) => Some(previous),
        }
    }

    /// Stop the current video and return it
    pub fn stop(&mut self) -> Result<VideoId> {
        match std::mem::take(self) {
            Self::Stopped => Err(LibraryError::NothingPlaying),
            Self::Playing(id) | Self::Paused(id) => Ok(id),
        }
    }

    /// Pause the current video
    pub fn pause(&mut self) -> Result<PauseTransition> {
        match self {
            Self::Stopped => Err(LibraryError::NothingPlaying),
            Self::Paused(id) => Ok(PauseTransition::AlreadyPaused(id.clone())),
            Self::Playing(id) => {
                let id = id.clone();
                *self = Self::Paused(id.clone());
                Ok(PauseTransition::Paused(id))
            }
        }
    }

    /// Resume a paused video
    pub fn resume(&mut self) -> Result<VideoId> {
        match self {
            Self::Stopped => Err(LibraryError::NothingPlaying),
            Self::Playing(id) => Err(LibraryError::NotPaused(id.clone())),
            Self::Paused(id) => {
                let id = id.clone();
                *self = Self::Playing(id.clone());
                Ok(id)
            }
        }
    }

    /// Current video and whether it is paused
    pub fn current(&self) -> Option<(&VideoId, bool)> {
        match self {
            Self::Stopped => None,
            Self::Playing(id) => Some((id, false)),
            Self::Paused(id) => Some((id, true)),
        }
    }

    /// Current video id, if any
    pub fn current_id(&self) -> Option<&VideoId> {
        self.current().map(|(id, _)| id)
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self, Self::Stopped)
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, Self::Paused(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> VideoId {
        VideoId::new(s)
    }

    #[test]
    fn initial_state_is_stopped() {
        let state = PlaybackState::default();
        assert!(state.is_stopped());
        assert_eq!(state.current(), None);
    }

    #[test]
    fn start_from_stopped_has_no_previous() {
        let mut state = PlaybackState::default();
        assert_eq!(state.start(id("v1")), None);
        assert_eq!(state, PlaybackState::Playing(id("v1")));
    }

    #[test]
    fn start_replaces_playing_video() {
        let mut state = PlaybackState::Playing(id("v1"));
        assert_eq!(state.start(id("v2")), Some(id("v1")));
        assert_eq!(state.current(), Some((&id("v2"), false)));
    }

    #[test]
    fn start_replaces_paused_video_and_clears_pause() {
        let mut state = PlaybackState::Paused(id("v1"));
        assert_eq!(state.start(id("v2")), Some(id("v1")));
        assert!(!state.is_paused());
    }

    #[test]
    fn stop_when_stopped_fails_without_change() {
        let mut state = PlaybackState::Stopped;
        assert_eq!(state.stop(), Err(LibraryError::NothingPlaying));
        assert!(state.is_stopped());
    }

    #[test]
    fn stop_clears_paused_video() {
        let mut state = PlaybackState::Paused(id("v1"));
        assert_eq!(state.stop(), Ok(id("v1")));
        assert!(state.is_stopped());
    }

    #[test]
    fn pause_twice_reports_already_paused() {
        let mut state = PlaybackState::Playing(id("v1"));
        assert_eq!(state.pause(), Ok(PauseTransition::Paused(id("v1"))));
        assert_eq!(state.pause(), Ok(PauseTransition::AlreadyPaused(id("v1"))));
        assert_eq!(state, PlaybackState::Paused(id("v1")));
    }

    #[test]
    fn pause_when_stopped_fails() {
        let mut state = PlaybackState::Stopped;
        assert_eq!(state.pause(), Err(LibraryError::NothingPlaying));
    }

    #[test]
    fn resume_requires_pause() {
        let mut state = PlaybackState::Playing(id("v1"));
        assert_eq!(state.resume(), Err(LibraryError::NotPaused(id("v1"))));

        let mut state = PlaybackState::Stopped;
        assert_eq!(state.resume(), Err(LibraryError::NothingPlaying));
    }

    #[test]
    fn pause_then_resume_round_trips() {
        let mut state = PlaybackState::Playing(id("v1"));
        let before = state.clone();
        state.pause().unwrap();
        state.resume().unwrap();
        assert_eq!(state, before);
    }
}
