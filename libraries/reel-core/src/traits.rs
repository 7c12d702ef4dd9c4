/// Core traits for Reel
use crate::types::{Video, VideoId};

/// Read-only video lookup
///
/// The playback session only ever queries the catalog; it never mutates it.
/// Implementers must guarantee ids are unique.
pub trait VideoCatalog {
    /// All videos in catalog order
    fn videos(&self) -> Vec<&Video>;

    /// Look up a single video by id
    fn get(&self, id: &VideoId) -> Option<&Video>;

    /// Whether the catalog knows this id
    fn contains(&self, id: &VideoId) -> bool {
        self.get(id).is_some()
    }

    /// Number of videos in the catalog
    fn len(&self) -> usize {
        self.videos().len()
    }

    /// Whether the catalog has no videos
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
