//! Catalog search
//!
//! Results exclude flagged videos and are ordered by title, then id.

use crate::flags::FlagRegistry;
use reel_core::{Video, VideoCatalog};

/// Videos whose title contains `term`, ignoring case
pub fn by_title<'a, C>(catalog: &'a C, flags: &FlagRegistry, term: &str) -> Vec<&'a Video>
where
    C: VideoCatalog + ?Sized,
{
    visible(catalog, flags, |video| video.title_contains(term))
}

/// Videos carrying `tag`, ignoring case
pub fn by_tag<'a, C>(catalog: &'a C, flags: &FlagRegistry, tag: &str) -> Vec<&'a Video>
where
    C: VideoCatalog + ?Sized,
{
    visible(catalog, flags, |video| video.has_tag(tag))
}

/// Every unflagged video
pub fn all<'a, C>(catalog: &'a C, flags: &FlagRegistry) -> Vec<&'a Video>
where
    C: VideoCatalog + ?Sized,
{
    visible(catalog, flags, |_| true)
}

fn visible<'a, C, F>(catalog: &'a C, flags: &FlagRegistry, mut matches: F) -> Vec<&'a Video>
where
    C: VideoCatalog + ?Sized,
    F: FnMut(&Video) -> bool,
{
    let mut found: Vec<&Video> = catalog
        .videos()
        .into_iter()
        .filter(|video| !flags.is_flagged(&video.id) && matches(*video))
        .collect();
    sort_for_display(&mut found);
    found
}

/// Order by title, ties broken by id
pub fn sort_for_display(videos: &mut [&Video]) {
    videos.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
}
