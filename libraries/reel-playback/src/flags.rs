//! Moderation flags
//!
//! A flagged video is hidden from listing, search, and random play, and
//! cannot be played or added to playlists until allowed again.

use crate::error::{LibraryError, Result};
use reel_core::VideoId;
use std::collections::HashMap;

/// Reason recorded when a flag is raised without one
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// Flag reasons by video
#[derive(Debug, Clone, Default)]
pub struct FlagRegistry {
    reasons: HashMap<VideoId, String>,
}

impl FlagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag a video
    ///
    /// A missing or blank reason is recorded as [`DEFAULT_FLAG_REASON`].
    /// Returns the recorded reason.
    pub fn flag(&mut self, id: &VideoId, reason: Option<&str>) -> Result<&str> {
        if let Some(existing) = self.reasons.get(id) {
            return Err(LibraryError::AlreadyFlagged {
                video: id.clone(),
                reason: existing.clone(),
            });
        }

        let reason = reason
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_FLAG_REASON);

        Ok(self
            .reasons
            .entry(id.clone())
            .or_insert_with(|| reason.to_string())
            .as_str())
    }

    /// Clear a flag, returning the reason it carried
    pub fn allow(&mut self, id: &VideoId) -> Result<String> {
        self.reasons
            .remove(id)
            .ok_or_else(|| LibraryError::NotFlagged(id.clone()))
    }

    /// Flag reason, if the video is flagged
    pub fn reason(&self, id: &VideoId) -> Option<&str> {
        self.reasons.get(id).map(String::as_str)
    }

    pub fn is_flagged(&self, id: &VideoId) -> bool {
        self.reasons.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.reasons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }
}
