//! User playlists
//!
//! Playlists are identified case-insensitively: the key is the uppercased
//! name, while the name as first created is kept for display.

use crate::error::{LibraryError, Result};
use reel_core::VideoId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Case-insensitive playlist identity
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaylistKey(String);

impl PlaylistKey {
    /// Derive the key for a playlist name
    pub fn from_name(name: &str) -> Self {
        Self(name.to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Named, ordered list of unique video ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    name: String,
    entries: Vec<VideoId>,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Display name, cased as first created
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> PlaylistKey {
        PlaylistKey::from_name(&self.name)
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[VideoId] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &VideoId) -> bool {
        self.entries.contains(id)
    }

    /// Append a video, rejecting duplicates
    pub fn add(&mut self, id: VideoId) -> Result<()> {
        if self.contains(&id) {
            return Err(LibraryError::DuplicateEntry {
                playlist: self.name.clone(),
                video: id,
            });
        }
        self.entries.push(id);
        Ok(())
    }

    /// Remove a video
    pub fn remove(&mut self, id: &VideoId) -> Result<()> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry == id)
            .ok_or_else(|| LibraryError::EntryNotInPlaylist {
                playlist: self.name.clone(),
                video: id.clone(),
            })?;
        self.entries.remove(position);
        Ok(())
    }

    /// Remove every entry, returning how many were removed
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }
}

/// All playlists of a session, keyed case-insensitively
///
/// Iteration order is key order, which sorts display names
/// case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct PlaylistCollection {
    playlists: BTreeMap<PlaylistKey, Playlist>,
}

impl PlaylistCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty playlist
    pub fn create(&mut self, name: &str) -> Result<&Playlist> {
        let key = PlaylistKey::from_name(name);
        if let Some(existing) = self.playlists.get(&key) {
            return Err(LibraryError::AlreadyExists {
                name: name.to_string(),
                existing: existing.name().to_string(),
            });
        }
        Ok(self.playlists.entry(key).or_insert_with(|| Playlist::new(name)))
    }

    /// Look up a playlist by name, ignoring case
    pub fn get(&self, name: &str) -> Result<&Playlist> {
        self.playlists
            .get(&PlaylistKey::from_name(name))
            .ok_or_else(|| LibraryError::PlaylistNotFound(name.to_string()))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Playlist> {
        self.playlists
            .get_mut(&PlaylistKey::from_name(name))
            .ok_or_else(|| LibraryError::PlaylistNotFound(name.to_string()))
    }

    /// Remove a playlist entirely
    pub fn delete(&mut self, name: &str) -> Result<Playlist> {
        self.playlists
            .remove(&PlaylistKey::from_name(name))
            .ok_or_else(|| LibraryError::PlaylistNotFound(name.to_string()))
    }

    /// Playlists sorted case-insensitively by name
    pub fn iter(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.values()
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}
