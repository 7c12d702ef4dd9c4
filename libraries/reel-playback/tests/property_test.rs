//! Property-based tests for the library session
//!
//! Uses proptest to run random command sequences and verify the session
//! invariants hold after every step.

use proptest::prelude::*;
use reel_core::{InMemoryCatalog, Video, VideoId};
use reel_playback::{Command, LibraryError, LibrarySession, PlaybackState};
use std::collections::HashSet;

// ===== Helpers =====

const VIDEO_IDS: &[&str] = &["v0", "v1", "v2", "v3", "v4"];
const PLAYLIST_NAMES: &[&str] = &["Mix", "MIX", "mix", "Road Trip", "road trip"];

fn session(seed: u64) -> LibrarySession {
    let catalog = InMemoryCatalog::from_videos(
        VIDEO_IDS
            .iter()
            .enumerate()
            .map(|(i, id)| Video::new(*id, format!("Video {i}"), [format!("#tag{}", i % 2)])),
    )
    .unwrap();
    LibrarySession::with_seed(catalog, seed)
}

/// Video ids, including one the catalog does not know
fn arbitrary_video_id() -> impl Strategy<Value = VideoId> {
    prop_oneof![
        prop::sample::select(VIDEO_IDS).prop_map(VideoId::new),
        Just(VideoId::new("missing")),
    ]
}

fn arbitrary_playlist() -> impl Strategy<Value = String> {
    prop::sample::select(PLAYLIST_NAMES).prop_map(str::to_string)
}

fn arbitrary_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        arbitrary_video_id().prop_map(|video_id| Command::Play { video_id }),
        Just(Command::PlayRandom),
        Just(Command::Stop),
        Just(Command::Pause),
        Just(Command::Continue),
        arbitrary_playlist().prop_map(|name| Command::CreatePlaylist { name }),
        (arbitrary_playlist(), arbitrary_video_id())
            .prop_map(|(playlist, video_id)| Command::AddToPlaylist { playlist, video_id }),
        (arbitrary_playlist(), arbitrary_video_id())
            .prop_map(|(playlist, video_id)| Command::RemoveFromPlaylist { playlist, video_id }),
        arbitrary_playlist().prop_map(|playlist| Command::ClearPlaylist { playlist }),
        arbitrary_playlist().prop_map(|playlist| Command::DeletePlaylist { playlist }),
        arbitrary_video_id().prop_map(|video_id| Command::FlagVideo {
            video_id,
            reason: None
        }),
        arbitrary_video_id().prop_map(|video_id| Command::AllowVideo { video_id }),
    ]
}

fn assert_invariants(session: &LibrarySession) -> Result<(), TestCaseError> {
    use reel_core::VideoCatalog;

    if let Some(id) = session.playback().current_id() {
        prop_assert!(session.catalog().contains(id), "Now playing unknown video {}", id);
    }

    let mut keys = HashSet::new();
    for playlist in session.playlists().iter() {
        prop_assert!(keys.insert(playlist.key()), "Duplicate playlist key");

        let unique: HashSet<&VideoId> = playlist.entries().iter().collect();
        prop_assert_eq!(unique.len(), playlist.len(), "Duplicate playlist entry");

        for id in playlist.entries() {
            prop_assert!(session.catalog().contains(id));
        }
    }

    Ok(())
}

// ===== Property Tests =====

proptest! {
    /// Property: invariants survive any command sequence
    #[test]
    fn invariants_hold_for_any_sequence(
        seed in any::<u64>(),
        commands in prop::collection::vec(arbitrary_command(), 1..60)
    ) {
        let mut session = session(seed);
        for command in commands {
            let _ = session.execute(command);
            assert_invariants(&session)?;
        }
    }

    /// Property: a failed command never changes playback state
    #[test]
    fn failed_playback_commands_do_not_mutate(
        seed in any::<u64>(),
        setup in prop::collection::vec(arbitrary_command(), 0..20),
        command in arbitrary_command()
    ) {
        let mut session = session(seed);
        for step in setup {
            let _ = session.execute(step);
        }

        let before = session.playback().clone();
        if session.execute(command).is_err() {
            prop_assert_eq!(session.playback(), &before);
        }
    }

    /// Property: playing a valid unflagged video always leaves exactly it playing
    #[test]
    fn play_leaves_single_unpaused_video(
        setup in prop::collection::vec(arbitrary_command(), 0..20),
        target in prop::sample::select(VIDEO_IDS)
    ) {
        let mut session = session(0);
        for step in setup {
            let _ = session.execute(step);
        }
        let target = VideoId::new(target);

        match session.play(&target) {
            Ok(started) => {
                prop_assert_eq!(&started.playing.id, &target);
                prop_assert_eq!(session.playback(), &PlaybackState::Playing(target));
            }
            Err(LibraryError::VideoFlagged { .. }) => {
                prop_assert!(session.flags().is_flagged(&target));
            }
            Err(other) => prop_assert!(false, "Unexpected error: {}", other),
        }
    }

    /// Property: pause followed by continue restores the prior state
    #[test]
    fn pause_continue_round_trip(target in prop::sample::select(VIDEO_IDS)) {
        let mut session = session(0);
        session.play(&VideoId::new(target)).unwrap();
        let before = session.playback().clone();

        session.pause().unwrap();
        session.continue_video().unwrap();

        prop_assert_eq!(session.playback(), &before);
    }

    /// Property: adding the same video twice never grows the playlist twice
    #[test]
    fn duplicate_add_keeps_size(
        name in arbitrary_playlist(),
        target in prop::sample::select(VIDEO_IDS)
    ) {
        let mut session = session(0);
        session.create_playlist(&name).unwrap();
        let target = VideoId::new(target);

        session.add_to_playlist(&name, &target).unwrap();
        let is_duplicate = matches!(
            session.add_to_playlist(&name, &target),
            Err(LibraryError::DuplicateEntry { .. })
        );
        prop_assert!(is_duplicate);
        prop_assert_eq!(session.playlists().get(&name).unwrap().len(), 1);
    }
}
