//! In-memory video catalog
//!
//! Loads the line-oriented catalog format:
//!
//! ```text
//! Funny Dogs | funny_dogs_video_id | #dog , #animal
//! Video about nothing | nothing_video_id |
//! ```
//!
//! Each line is `title | id | tags`, tags separated by commas. The tag field
//! may be empty or omitted entirely.

use crate::error::{CatalogError, Result};
use crate::traits::VideoCatalog;
use crate::types::{Video, VideoId};
use std::collections::HashMap;
use std::path::Path;

/// Field separator in catalog lines
const FIELD_SEPARATOR: char = '|';

/// Tag separator inside the tag field
const TAG_SEPARATOR: char = ',';

/// Catalog held entirely in memory
///
/// Preserves the order videos were supplied in and indexes them by id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    videos: Vec<Video>,
    index: HashMap<VideoId, usize>,
}

impl InMemoryCatalog {
    /// Build a catalog from videos, rejecting duplicate ids
    pub fn from_videos(videos: impl IntoIterator<Item = Video>) -> Result<Self> {
        let mut catalog = Self::default();
        for (position, video) in videos.into_iter().enumerate() {
            catalog.insert(position + 1, video)?;
        }
        Ok(catalog)
    }

    /// Parse catalog text
    pub fn parse(contents: &str) -> Result<Self> {
        let mut catalog = Self::default();

        for (number, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let video = parse_line(number + 1, line)?;
            catalog.insert(number + 1, video)?;
        }

        Ok(catalog)
    }

    /// Load a catalog file from disk
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!("Loading video catalog from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::parse(&contents)?;
        tracing::info!(
            "Loaded {} videos from {}",
            catalog.videos.len(),
            path.display()
        );
        Ok(catalog)
    }

    fn insert(&mut self, line: usize, video: Video) -> Result<()> {
        if self.index.contains_key(&video.id) {
            return Err(CatalogError::DuplicateId {
                id: video.id.to_string(),
                line,
            });
        }
        self.index.insert(video.id.clone(), self.videos.len());
        self.videos.push(video);
        Ok(())
    }
}

impl VideoCatalog for InMemoryCatalog {
    fn videos(&self) -> Vec<&Video> {
        self.videos.iter().collect()
    }

    fn get(&self, id: &VideoId) -> Option<&Video> {
        self.index.get(id).map(|&i| &self.videos[i])
    }

    fn len(&self) -> usize {
        self.videos.len()
    }
}

/// Parse one non-blank catalog line
fn parse_line(number: usize, line: &str) -> Result<Video> {
    let mut fields = line.splitn(3, FIELD_SEPARATOR).map(str::trim);

    let title = fields.next().unwrap_or_default();
    let id = fields
        .next()
        .ok_or_else(|| CatalogError::parse(number, "expected `title | id | tags`"))?;
    let tags = fields.next().unwrap_or_default();

    if title.is_empty() {
        return Err(CatalogError::parse(number, "missing title"));
    }
    if id.is_empty() {
        return Err(CatalogError::parse(number, "missing video id"));
    }

    let tags = tags
        .split(TAG_SEPARATOR)
        .map(str::trim)
        .filter(|tag| !tag.is_empty());

    Ok(Video::new(id, title, tags))
}
