//! Library session - command orchestration
//!
//! Owns the playback state, playlists, and flags for one user and exposes
//! every library command as a method. Each invariant is enforced by the
//! component that owns it (`PlaybackState`, `Playlist`, `FlagRegistry`);
//! the session validates catalog references and sequences the calls.

use crate::{
    command::{Command, Outcome},
    error::{LibraryError, Result},
    flags::FlagRegistry,
    playlist::{Playlist, PlaylistCollection},
    random::choose_video,
    search,
    state::{PauseTransition, PlaybackState},
    types::{
        FlaggedVideo, Listing, NowPlaying, PauseOutcome, PlaybackStarted, PlaylistEntry,
        PlaylistView,
    },
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use reel_core::{InMemoryCatalog, Video, VideoCatalog, VideoId};

/// Central library state
///
/// Single-owner and synchronous: every method completes immediately and
/// never writes output itself.
pub struct LibrarySession<C: VideoCatalog = InMemoryCatalog> {
    catalog: C,
    playback: PlaybackState,
    playlists: PlaylistCollection,
    flags: FlagRegistry,
    rng: Box<dyn RngCore>,
}

impl<C: VideoCatalog> LibrarySession<C> {
    /// Create a session with an entropy-seeded random source
    pub fn new(catalog: C) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }

    /// Create a session whose random play is reproducible
    pub fn with_seed(catalog: C, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }

    /// Create a session with a caller-supplied random source
    pub fn with_rng(catalog: C, rng: impl RngCore + 'static) -> Self {
        Self {
            catalog,
            playback: PlaybackState::default(),
            playlists: PlaylistCollection::new(),
            flags: FlagRegistry::new(),
            rng: Box::new(rng),
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    pub fn playlists(&self) -> &PlaylistCollection {
        &self.playlists
    }

    pub fn flags(&self) -> &FlagRegistry {
        &self.flags
    }

    // ===== Dispatch =====

    /// Run a command and wrap its result
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        tracing::trace!(?command, "Executing command");

        let outcome = match command {
            Command::NumberOfVideos => Outcome::VideoCount {
                count: self.video_count(),
            },
            Command::ShowAllVideos => Outcome::AllVideos {
                videos: self.list_videos(),
            },
            Command::Play { video_id } => Outcome::Playing {
                started: self.play(&video_id)?,
            },
            Command::PlayRandom => Outcome::Playing {
                started: self.play_random()?,
            },
            Command::Stop => Outcome::Stopped { video: self.stop()? },
            Command::Pause => Outcome::Paused {
                pause: self.pause()?,
            },
            Command::Continue => Outcome::Continued {
                video: self.continue_video()?,
            },
            Command::ShowPlaying => Outcome::ShowPlaying {
                now_playing: self.now_playing(),
            },
            Command::CreatePlaylist { name } => Outcome::PlaylistCreated {
                name: self.create_playlist(&name)?,
            },
            Command::AddToPlaylist { playlist, video_id } => {
                let video = self.add_to_playlist(&playlist, &video_id)?;
                Outcome::AddedToPlaylist { playlist, video }
            }
            Command::RemoveFromPlaylist { playlist, video_id } => {
                let video = self.remove_from_playlist(&playlist, &video_id)?;
                Outcome::RemovedFromPlaylist { playlist, video }
            }
            Command::ClearPlaylist { playlist } => {
                let removed = self.clear_playlist(&playlist)?;
                Outcome::PlaylistCleared { playlist, removed }
            }
            Command::DeletePlaylist { playlist } => {
                self.delete_playlist(&playlist)?;
                Outcome::PlaylistDeleted { playlist }
            }
            Command::ShowAllPlaylists => Outcome::Playlists {
                names: self.list_playlists(),
            },
            Command::ShowPlaylist { playlist } => Outcome::PlaylistContents {
                view: self.show_playlist(&playlist)?,
            },
            Command::SearchVideos { term } => {
                let results = self.search_videos(&term);
                Outcome::SearchResults {
                    query: term,
                    results,
                }
            }
            Command::SearchVideosWithTag { tag } => {
                let results = self.search_videos_with_tag(&tag);
                Outcome::SearchResults {
                    query: tag,
                    results,
                }
            }
            Command::FlagVideo { video_id, reason } => Outcome::Flagged {
                flagged: self.flag_video(&video_id, reason.as_deref())?,
            },
            Command::AllowVideo { video_id } => Outcome::Allowed {
                video: self.allow_video(&video_id)?,
            },
        };

        Ok(outcome)
    }

    // ===== Library queries =====

    /// Number of videos in the catalog, flagged ones included
    pub fn video_count(&self) -> usize {
        self.catalog.len()
    }

    /// Every unflagged video, ordered by title
    pub fn list_videos(&self) -> Listing<Video> {
        Listing::from_vec(
            search::all(&self.catalog, &self.flags)
                .into_iter()
                .cloned()
                .collect(),
        )
    }

    /// Currently loaded video, if any
    pub fn now_playing(&self) -> Option<NowPlaying> {
        let (id, paused) = self.playback.current()?;
        let video = self.catalog.get(id)?.clone();
        Some(NowPlaying { video, paused })
    }

    // ===== Playback =====

    /// Play a video, implicitly stopping the current one
    pub fn play(&mut self, id: &VideoId) -> Result<PlaybackStarted> {
        let video = self.playable(id)?.clone();
        self.start(video)
    }

    /// Play a random unflagged video
    pub fn play_random(&mut self) -> Result<PlaybackStarted> {
        let candidates = search::all(&self.catalog, &self.flags);
        let video = choose_video(&candidates, &mut *self.rng)
            .ok_or(LibraryError::CatalogEmpty)?
            .clone();
        self.start(video)
    }

    /// Stop the current video
    pub fn stop(&mut self) -> Result<Video> {
        let id = self.playback.stop()?;
        tracing::debug!("Stopped video {}", id);
        self.video(&id)
    }

    /// Pause the current video
    pub fn pause(&mut self) -> Result<PauseOutcome> {
        let (id, already_paused) = match self.playback.pause()? {
            PauseTransition::Paused(id) => (id, false),
            PauseTransition::AlreadyPaused(id) => (id, true),
        };
        if !already_paused {
            tracing::debug!("Paused video {}", id);
        }
        Ok(PauseOutcome {
            video: self.video(&id)?,
            already_paused,
        })
    }

    /// Resume the paused video
    pub fn continue_video(&mut self) -> Result<Video> {
        let id = self.playback.resume()?;
        tracing::debug!("Continued video {}", id);
        self.video(&id)
    }

    fn start(&mut self, video: Video) -> Result<PlaybackStarted> {
        let stopped = self
            .playback
            .start(video.id.clone())
            .map(|previous| self.video(&previous))
            .transpose()?;

        if let Some(previous) = &stopped {
            tracing::debug!("Stopped video {}", previous.id);
        }
        tracing::debug!("Playing video {}", video.id);

        Ok(PlaybackStarted {
            stopped,
            playing: video,
        })
    }

    // ===== Playlists =====

    /// Create a playlist, returning its display name
    pub fn create_playlist(&mut self, name: &str) -> Result<String> {
        let playlist = self.playlists.create(name)?;
        tracing::debug!("Created playlist {}", playlist.name());
        Ok(playlist.name().to_string())
    }

    /// Append a video to a playlist
    pub fn add_to_playlist(&mut self, name: &str, id: &VideoId) -> Result<Video> {
        self.playlists.get(name)?;
        let video = self.playable(id)?.clone();

        let playlist = self.playlists.get_mut(name)?;
        playlist.add(video.id.clone())?;
        tracing::debug!("Added {} to playlist {}", video.id, playlist.name());

        Ok(video)
    }

    /// Remove a video from a playlist
    pub fn remove_from_playlist(&mut self, name: &str, id: &VideoId) -> Result<Video> {
        self.playlists.get(name)?;
        let video = self.video(id)?;

        let playlist = self.playlists.get_mut(name)?;
        playlist.remove(id)?;
        tracing::debug!("Removed {} from playlist {}", id, playlist.name());

        Ok(video)
    }

    /// Empty a playlist, returning how many entries it held
    pub fn clear_playlist(&mut self, name: &str) -> Result<usize> {
        let playlist = self.playlists.get_mut(name)?;
        let removed = playlist.clear();
        tracing::debug!("Cleared {} videos from playlist {}", removed, playlist.name());
        Ok(removed)
    }

    /// Delete a playlist
    pub fn delete_playlist(&mut self, name: &str) -> Result<Playlist> {
        let playlist = self.playlists.delete(name)?;
        tracing::debug!("Deleted playlist {}", playlist.name());
        Ok(playlist)
    }

    /// Playlist names, sorted case-insensitively
    pub fn list_playlists(&self) -> Listing<String> {
        Listing::from_vec(
            self.playlists
                .iter()
                .map(|playlist| playlist.name().to_string())
                .collect(),
        )
    }

    /// Entries of a playlist in insertion order
    pub fn show_playlist(&self, name: &str) -> Result<PlaylistView> {
        let playlist = self.playlists.get(name)?;

        let entries = playlist
            .entries()
            .iter()
            .map(|id| {
                Ok(PlaylistEntry {
                    video: self.video(id)?,
                    flag_reason: self.flags.reason(id).map(str::to_string),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(PlaylistView {
            name: playlist.name().to_string(),
            entries: Listing::from_vec(entries),
        })
    }

    // ===== Search =====

    /// Unflagged videos whose title contains `term`
    pub fn search_videos(&self, term: &str) -> Listing<Video> {
        Listing::from_vec(
            search::by_title(&self.catalog, &self.flags, term)
                .into_iter()
                .cloned()
                .collect(),
        )
    }

    /// Unflagged videos tagged with `tag`
    pub fn search_videos_with_tag(&self, tag: &str) -> Listing<Video> {
        Listing::from_vec(
            search::by_tag(&self.catalog, &self.flags, tag)
                .into_iter()
                .cloned()
                .collect(),
        )
    }

    // ===== Flags =====

    /// Flag a video
    ///
    /// Does not stop the video if it is currently playing.
    pub fn flag_video(&mut self, id: &VideoId, reason: Option<&str>) -> Result<FlaggedVideo> {
        let video = self.video(id)?;
        let reason = self.flags.flag(id, reason)?.to_string();
        tracing::info!("Flagged video {} (reason: {})", id, reason);
        Ok(FlaggedVideo { video, reason })
    }

    /// Remove a flag
    pub fn allow_video(&mut self, id: &VideoId) -> Result<Video> {
        let video = self.video(id)?;
        self.flags.allow(id)?;
        tracing::info!("Allowed video {}", id);
        Ok(video)
    }

    // ===== Helpers =====

    fn video(&self, id: &VideoId) -> Result<Video> {
        self.catalog
            .get(id)
            .cloned()
            .ok_or_else(|| LibraryError::VideoNotFound(id.clone()))
    }

    /// Catalog video that is not flagged
    fn playable(&self, id: &VideoId) -> Result<&Video> {
        let video = self
            .catalog
            .get(id)
            .ok_or_else(|| LibraryError::VideoNotFound(id.clone()))?;

        if let Some(reason) = self.flags.reason(id) {
            return Err(LibraryError::VideoFlagged {
                video: id.clone(),
                title: video.title.clone(),
                reason: reason.to_string(),
            });
        }

        Ok(video)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> LibrarySession {
        let catalog = InMemoryCatalog::from_videos([
            Video::new("v1", "Cat Video", ["#cat"]),
            Video::new("v2", "Dog Video", ["#dog"]),
        ])
        .unwrap();
        LibrarySession::with_seed(catalog, 3)
    }

    fn id(s: &str) -> VideoId {
        VideoId::new(s)
    }

    #[test]
    fn failed_play_keeps_current_video() {
        let mut session = session();
        session.play(&id("v1")).unwrap();

        assert_eq!(
            session.play(&id("missing")),
            Err(LibraryError::VideoNotFound(id("missing")))
        );
        assert_eq!(session.playback(), &PlaybackState::Playing(id("v1")));
    }

    #[test]
    fn play_reports_implicit_stop() {
        let mut session = session();
        assert!(session.play(&id("v1")).unwrap().stopped.is_none());

        let started = session.play(&id("v2")).unwrap();
        assert_eq!(started.stopped.unwrap().id, id("v1"));
        assert_eq!(started.playing.id, id("v2"));
    }

    #[test]
    fn replaying_current_video_restarts_it() {
        let mut session = session();
        session.play(&id("v1")).unwrap();
        session.pause().unwrap();

        let started = session.play(&id("v1")).unwrap();
        assert_eq!(started.stopped.unwrap().id, id("v1"));
        assert!(!session.now_playing().unwrap().paused);
    }

    #[test]
    fn add_checks_playlist_before_video() {
        let mut session = session();
        assert_eq!(
            session.add_to_playlist("nope", &id("missing")),
            Err(LibraryError::PlaylistNotFound("nope".to_string()))
        );
    }

    #[test]
    fn remove_checks_catalog_before_entries() {
        let mut session = session();
        session.create_playlist("Mix").unwrap();
        assert_eq!(
            session.remove_from_playlist("mix", &id("missing")),
            Err(LibraryError::VideoNotFound(id("missing")))
        );
        assert!(matches!(
            session.remove_from_playlist("mix", &id("v1")),
            Err(LibraryError::EntryNotInPlaylist { .. })
        ));
    }

    #[test]
    fn flagged_video_cannot_be_added() {
        let mut session = session();
        session.create_playlist("Mix").unwrap();
        session.flag_video(&id("v1"), Some("spam")).unwrap();

        assert_eq!(
            session.add_to_playlist("Mix", &id("v1")),
            Err(LibraryError::VideoFlagged {
                video: id("v1"),
                title: "Cat Video".to_string(),
                reason: "spam".to_string(),
            })
        );
    }

    #[test]
    fn show_playlist_marks_flagged_entries() {
        let mut session = session();
        session.create_playlist("Mix").unwrap();
        session.add_to_playlist("Mix", &id("v1")).unwrap();
        session.flag_video(&id("v1"), None).unwrap();

        let view = session.show_playlist("MIX").unwrap();
        assert_eq!(view.name, "Mix");
        assert_eq!(
            view.entries.items()[0].flag_reason.as_deref(),
            Some("Not supplied")
        );
    }

    #[test]
    fn execute_wraps_typed_results() {
        let mut session = session();
        assert_eq!(
            session.execute(Command::NumberOfVideos),
            Ok(Outcome::VideoCount { count: 2 })
        );
        assert_eq!(
            session.execute(Command::Stop),
            Err(LibraryError::NothingPlaying)
        );
        assert_eq!(
            session.execute(Command::ShowAllPlaylists),
            Ok(Outcome::Playlists {
                names: Listing::Empty
            })
        );
    }
}
