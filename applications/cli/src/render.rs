//! Text and JSON rendering of command results

use reel_core::Video;
use reel_playback::{Command, LibraryError, Listing, Outcome};
use serde_json::json;

/// Shown after numbered search results when a selection can be made
pub const SELECTION_PROMPT: [&str; 2] = [
    "Would you like to play any of the above? If yes, specify the number of the video.",
    "If your answer is not a valid number, we will assume it's a no.",
];

/// `title (id) [tag1 tag2]`
pub fn format_video(video: &Video) -> String {
    format!("{} ({}) [{}]", video.title, video.id, video.tags.join(" "))
}

/// Lines for a successful outcome
pub fn render_outcome(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::VideoCount { count } => vec![format!("{count} videos in the library")],

        Outcome::AllVideos { videos } => match videos {
            Listing::Empty => vec!["No videos available".to_string()],
            Listing::Items(videos) => with_header(
                "Here's a list of all available videos:",
                videos.iter().map(|v| format!(" {}", format_video(v))),
            ),
        },

        Outcome::Playing { started } => {
            let mut lines = Vec::with_capacity(2);
            if let Some(stopped) = &started.stopped {
                lines.push(format!("Stopping video: {}", stopped.title));
            }
            lines.push(format!("Playing video: {}", started.playing.title));
            lines
        }

        Outcome::Stopped { video } => vec![format!("Stopping video: {}", video.title)],

        Outcome::Paused { pause } if pause.already_paused => {
            vec![format!("Video already paused: {}", pause.video.title)]
        }
        Outcome::Paused { pause } => vec![format!("Pausing video: {}", pause.video.title)],

        Outcome::Continued { video } => vec![format!("Continuing video: {}", video.title)],

        Outcome::ShowPlaying { now_playing } => match now_playing {
            None => vec!["No video is currently playing".to_string()],
            Some(now) => {
                let suffix = if now.paused { " - PAUSED" } else { "" };
                vec![format!("Currently playing: {}{}", format_video(&now.video), suffix)]
            }
        },

        Outcome::PlaylistCreated { name } => {
            vec![format!("Successfully created new playlist: {name}")]
        }

        Outcome::AddedToPlaylist { playlist, video } => {
            vec![format!("Added video to {playlist}: {}", video.title)]
        }

        Outcome::RemovedFromPlaylist { playlist, video } => {
            vec![format!("Removed video from {playlist}: {}", video.title)]
        }

        Outcome::PlaylistCleared { playlist, .. } => {
            vec![format!("Successfully removed all videos from {playlist}")]
        }

        Outcome::PlaylistDeleted { playlist } => vec![format!("Deleted playlist: {playlist}")],

        Outcome::Playlists { names } => match names {
            Listing::Empty => vec!["No playlists exist yet".to_string()],
            Listing::Items(names) => with_header(
                "Showing all playlists:",
                names.iter().map(|name| format!(" {name}")),
            ),
        },

        Outcome::PlaylistContents { view } => {
            let mut lines = vec![format!("Showing playlist: {}", view.name)];
            match &view.entries {
                Listing::Empty => lines.push(" No videos here yet".to_string()),
                Listing::Items(entries) => {
                    for entry in entries {
                        let mut line = format!(" {}", format_video(&entry.video));
                        if let Some(reason) = &entry.flag_reason {
                            line.push_str(&format!(" - FLAGGED (reason: {reason})"));
                        }
                        lines.push(line);
                    }
                }
            }
            lines
        }

        Outcome::SearchResults { query, results } => match results {
            Listing::Empty => vec![format!("No search results for {query}")],
            Listing::Items(videos) => with_header(
                format!("Here are the results for {query}:"),
                videos
                    .iter()
                    .enumerate()
                    .map(|(i, v)| format!(" {}) {}", i + 1, format_video(v))),
            ),
        },

        Outcome::Flagged { flagged } => vec![format!(
            "Successfully flagged video: {} (reason: {})",
            flagged.video.title, flagged.reason
        )],

        Outcome::Allowed { video } => {
            vec![format!("Successfully removed flag from video: {}", video.title)]
        }
    }
}

fn with_header(header: impl Into<String>, lines: impl Iterator<Item = String>) -> Vec<String> {
    std::iter::once(header.into()).chain(lines).collect()
}

/// Message for a failed command
pub fn render_error(command: &Command, err: &LibraryError) -> String {
    if matches!(command, Command::PlayRandom) && matches!(err, LibraryError::CatalogEmpty) {
        return "No videos available".to_string();
    }

    let prefix = match command {
        Command::Play { .. } | Command::PlayRandom => "Cannot play video".to_string(),
        Command::Stop => "Cannot stop video".to_string(),
        Command::Pause => "Cannot pause video".to_string(),
        Command::Continue => "Cannot continue video".to_string(),
        Command::CreatePlaylist { .. } => "Cannot create playlist".to_string(),
        Command::AddToPlaylist { playlist, .. } => format!("Cannot add video to {playlist}"),
        Command::RemoveFromPlaylist { playlist, .. } => {
            format!("Cannot remove video from {playlist}")
        }
        Command::ClearPlaylist { playlist } => format!("Cannot clear playlist {playlist}"),
        Command::DeletePlaylist { playlist } => format!("Cannot delete playlist {playlist}"),
        Command::ShowPlaylist { playlist } => format!("Cannot show playlist {playlist}"),
        Command::FlagVideo { .. } => "Cannot flag video".to_string(),
        Command::AllowVideo { .. } => "Cannot remove flag from video".to_string(),
        Command::NumberOfVideos
        | Command::ShowAllVideos
        | Command::ShowPlaying
        | Command::ShowAllPlaylists
        | Command::SearchVideos { .. }
        | Command::SearchVideosWithTag { .. } => "Cannot complete command".to_string(),
    };

    format!("{prefix}: {}", error_reason(err))
}

fn error_reason(err: &LibraryError) -> String {
    match err {
        LibraryError::VideoNotFound(_) => "Video does not exist".to_string(),
        LibraryError::NothingPlaying => "No video is currently playing".to_string(),
        LibraryError::NotPaused(_) => "Video is not paused".to_string(),
        LibraryError::AlreadyExists { .. } => {
            "A playlist with the same name already exists".to_string()
        }
        LibraryError::PlaylistNotFound(_) => "Playlist does not exist".to_string(),
        LibraryError::DuplicateEntry { .. } => "Video already added".to_string(),
        LibraryError::EntryNotInPlaylist { .. } => "Video is not in playlist".to_string(),
        LibraryError::VideoFlagged { reason, .. } => {
            format!("Video is currently flagged (reason: {reason})")
        }
        LibraryError::AlreadyFlagged { .. } => "Video is already flagged".to_string(),
        LibraryError::NotFlagged(_) => "Video is not flagged".to_string(),
        LibraryError::CatalogEmpty => "No videos available".to_string(),
    }
}

/// JSON document for a successful outcome
pub fn outcome_json(outcome: &Outcome) -> serde_json::Value {
    json!({ "ok": outcome })
}

/// JSON document for a failed command
pub fn error_json(command: &Command, err: &LibraryError) -> serde_json::Value {
    json!({
        "error": {
            "kind": err.kind(),
            "message": render_error(command, err),
            "detail": err.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel_core::VideoId;
    use reel_playback::{NowPlaying, PauseOutcome, PlaybackStarted, PlaylistEntry, PlaylistView};

    fn cats() -> Video {
        Video::new("amazing_cats_video_id", "Amazing Cats", ["#cat", "#animal"])
    }

    fn nothing() -> Video {
        Video::new("nothing_video_id", "Video about nothing", Vec::<String>::new())
    }

    #[test]
    fn video_format() {
        assert_eq!(
            format_video(&cats()),
            "Amazing Cats (amazing_cats_video_id) [#cat #animal]"
        );
        assert_eq!(
            format_video(&nothing()),
            "Video about nothing (nothing_video_id) []"
        );
    }

    #[test]
    fn play_lists_implicit_stop_first() {
        let outcome = Outcome::Playing {
            started: PlaybackStarted {
                stopped: Some(nothing()),
                playing: cats(),
            },
        };
        assert_eq!(
            render_outcome(&outcome),
            vec!["Stopping video: Video about nothing", "Playing video: Amazing Cats"]
        );
    }

    #[test]
    fn already_paused_has_own_message() {
        let outcome = Outcome::Paused {
            pause: PauseOutcome {
                video: cats(),
                already_paused: true,
            },
        };
        assert_eq!(render_outcome(&outcome), vec!["Video already paused: Amazing Cats"]);
    }

    #[test]
    fn show_playing_marks_pause() {
        let outcome = Outcome::ShowPlaying {
            now_playing: Some(NowPlaying {
                video: cats(),
                paused: true,
            }),
        };
        assert_eq!(
            render_outcome(&outcome),
            vec!["Currently playing: Amazing Cats (amazing_cats_video_id) [#cat #animal] - PAUSED"]
        );
    }

    #[test]
    fn playlist_contents_mark_flags() {
        let outcome = Outcome::PlaylistContents {
            view: PlaylistView {
                name: "Mix".to_string(),
                entries: Listing::Items(vec![PlaylistEntry {
                    video: cats(),
                    flag_reason: Some("dont_like_cats".to_string()),
                }]),
            },
        };
        assert_eq!(
            render_outcome(&outcome),
            vec![
                "Showing playlist: Mix",
                " Amazing Cats (amazing_cats_video_id) [#cat #animal] \
                 - FLAGGED (reason: dont_like_cats)",
            ]
        );
    }

    #[test]
    fn empty_listings_have_distinct_messages() {
        assert_eq!(
            render_outcome(&Outcome::Playlists {
                names: Listing::Empty
            }),
            vec!["No playlists exist yet"]
        );
        assert_eq!(
            render_outcome(&Outcome::SearchResults {
                query: "blah".to_string(),
                results: Listing::Empty,
            }),
            vec!["No search results for blah"]
        );
    }

    #[test]
    fn search_results_are_numbered() {
        let outcome = Outcome::SearchResults {
            query: "a".to_string(),
            results: Listing::Items(vec![cats(), nothing()]),
        };
        let lines = render_outcome(&outcome);
        assert_eq!(lines[0], "Here are the results for a:");
        assert!(lines[1].starts_with(" 1) Amazing Cats"));
        assert!(lines[2].starts_with(" 2) Video about nothing"));
    }

    #[test]
    fn errors_name_the_command() {
        let command = Command::AddToPlaylist {
            playlist: "my_playlist".to_string(),
            video_id: VideoId::new("v1"),
        };
        assert_eq!(
            render_error(&command, &LibraryError::DuplicateEntry {
                playlist: "my_playlist".to_string(),
                video: VideoId::new("v1"),
            }),
            "Cannot add video to my_playlist: Video already added"
        );
        assert_eq!(
            render_error(&Command::Stop, &LibraryError::NothingPlaying),
            "Cannot stop video: No video is currently playing"
        );
        assert_eq!(
            render_error(&Command::PlayRandom, &LibraryError::CatalogEmpty),
            "No videos available"
        );
    }

    #[test]
    fn flagged_error_includes_reason() {
        let err = LibraryError::VideoFlagged {
            video: VideoId::new("v1"),
            title: "Cat".to_string(),
            reason: "spam".to_string(),
        };
        assert_eq!(
            render_error(
                &Command::Play {
                    video_id: VideoId::new("v1")
                },
                &err
            ),
            "Cannot play video: Video is currently flagged (reason: spam)"
        );
    }

    #[test]
    fn json_error_carries_kind() {
        let value = error_json(&Command::Pause, &LibraryError::NothingPlaying);
        assert_eq!(value["error"]["kind"], "nothing_playing");
        assert_eq!(
            value["error"]["message"],
            "Cannot pause video: No video is currently playing"
        );
    }

    #[test]
    fn json_outcome_is_tagged() {
        let value = outcome_json(&Outcome::VideoCount { count: 5 });
        assert_eq!(value["ok"]["outcome"], "video_count");
        assert_eq!(value["ok"]["count"], 5);
    }
}
