//! Text command parsing
//!
//! Turns one input line such as `ADD_TO_PLAYLIST "Road Trip" funny_dogs_video_id`
//! into a library `Command`. Keywords are case-insensitive; arguments are
//! whitespace separated and may be wrapped in double quotes to include spaces.

use reel_core::VideoId;
use reel_playback::Command;
use thiserror::Error;

/// One parsed line of shell input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("{command} requires {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("{command} does not take argument {argument:?}")]
    UnexpectedArgument {
        command: &'static str,
        argument: String,
    },

    #[error("Unterminated quote")]
    UnterminatedQuote,
}

/// Command keywords with their argument synopsis, in help order
pub const COMMANDS: &[(&str, &str)] = &[
    ("NUMBER_OF_VIDEOS", "Shows how many videos are in the library."),
    ("SHOW_ALL_VIDEOS", "Lists all videos from the library."),
    ("PLAY <video_id>", "Plays specified video."),
    ("PLAY_RANDOM", "Plays a random video from the library."),
    ("STOP", "Stop the current video."),
    ("PAUSE", "Pause the current video."),
    ("CONTINUE", "Resume the current paused video."),
    (
        "SHOW_PLAYING",
        "Displays the title, video_id, tags and paused status of the current video.",
    ),
    ("CREATE_PLAYLIST <playlist_name>", "Creates a new (empty) playlist with the provided name."),
    ("ADD_TO_PLAYLIST <playlist_name> <video_id>", "Adds the requested video to the playlist."),
    (
        "REMOVE_FROM_PLAYLIST <playlist_name> <video_id>",
        "Removes the specified video from the specified playlist",
    ),
    ("CLEAR_PLAYLIST <playlist_name>", "Removes all the videos from the playlist."),
    ("DELETE_PLAYLIST <playlist_name>", "Deletes the playlist."),
    ("SHOW_ALL_PLAYLISTS", "Shows all the available playlists."),
    ("SHOW_PLAYLIST <playlist_name>", "Shows all the videos in the given playlist."),
    ("SEARCH_VIDEOS <search_term>", "Display all the videos whose titles contain the search_term."),
    (
        "SEARCH_VIDEOS_WITH_TAG <tag_name>",
        "Display all videos whose tags contains the provided tag.",
    ),
    ("FLAG_VIDEO <video_id> <flag_reason>", "Mark a video as flagged."),
    ("ALLOW_VIDEO <video_id>", "Removes a flag from a video."),
    ("HELP", "Displays help."),
    ("EXIT", "Terminates the program execution."),
];

/// Parse one input line
pub fn parse_line(line: &str) -> Result<Input, ParseError> {
    let tokens = tokenize(line)?;
    let mut args = Args::new(tokens);
    let keyword = args.keyword()?;

    let input = match keyword.as_str() {
        "NUMBER_OF_VIDEOS" => Input::Command(Command::NumberOfVideos),
        "SHOW_ALL_VIDEOS" => Input::Command(Command::ShowAllVideos),
        "PLAY" => Input::Command(Command::Play {
            video_id: args.video_id("PLAY")?,
        }),
        "PLAY_RANDOM" => Input::Command(Command::PlayRandom),
        "STOP" => Input::Command(Command::Stop),
        "PAUSE" => Input::Command(Command::Pause),
        "CONTINUE" => Input::Command(Command::Continue),
        "SHOW_PLAYING" => Input::Command(Command::ShowPlaying),
        "CREATE_PLAYLIST" => Input::Command(Command::CreatePlaylist {
            name: args.playlist("CREATE_PLAYLIST")?,
        }),
        "ADD_TO_PLAYLIST" => Input::Command(Command::AddToPlaylist {
            playlist: args.playlist("ADD_TO_PLAYLIST")?,
            video_id: args.video_id("ADD_TO_PLAYLIST")?,
        }),
        "REMOVE_FROM_PLAYLIST" => Input::Command(Command::RemoveFromPlaylist {
            playlist: args.playlist("REMOVE_FROM_PLAYLIST")?,
            video_id: args.video_id("REMOVE_FROM_PLAYLIST")?,
        }),
        "CLEAR_PLAYLIST" => Input::Command(Command::ClearPlaylist {
            playlist: args.playlist("CLEAR_PLAYLIST")?,
        }),
        "DELETE_PLAYLIST" => Input::Command(Command::DeletePlaylist {
            playlist: args.playlist("DELETE_PLAYLIST")?,
        }),
        "SHOW_ALL_PLAYLISTS" => Input::Command(Command::ShowAllPlaylists),
        "SHOW_PLAYLIST" => Input::Command(Command::ShowPlaylist {
            playlist: args.playlist("SHOW_PLAYLIST")?,
        }),
        "SEARCH_VIDEOS" => Input::Command(Command::SearchVideos {
            term: args.rest("SEARCH_VIDEOS", "a search term")?,
        }),
        "SEARCH_VIDEOS_WITH_TAG" => Input::Command(Command::SearchVideosWithTag {
            tag: args.required("SEARCH_VIDEOS_WITH_TAG", "a tag")?,
        }),
        "FLAG_VIDEO" => Input::Command(Command::FlagVideo {
            video_id: args.video_id("FLAG_VIDEO")?,
            reason: args.rest("FLAG_VIDEO", "a reason").ok(),
        }),
        "ALLOW_VIDEO" => Input::Command(Command::AllowVideo {
            video_id: args.video_id("ALLOW_VIDEO")?,
        }),
        "HELP" => Input::Help,
        "EXIT" => Input::Exit,
        _ => return Err(ParseError::UnknownCommand(keyword)),
    };

    args.finish(command_name(&input))?;
    Ok(input)
}

/// Split a line on whitespace, honouring double quotes
fn tokenize(line: &str) -> Result<Vec<String>, ParseError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quoted {
        return Err(ParseError::UnterminatedQuote);
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

fn command_name(input: &Input) -> &'static str {
    match input {
        Input::Help => "HELP",
        Input::Exit => "EXIT",
        Input::Command(command) => match command {
            Command::NumberOfVideos => "NUMBER_OF_VIDEOS",
            Command::ShowAllVideos => "SHOW_ALL_VIDEOS",
            Command::Play { .. } => "PLAY",
            Command::PlayRandom => "PLAY_RANDOM",
            Command::Stop => "STOP",
            Command::Pause => "PAUSE",
            Command::Continue => "CONTINUE",
            Command::ShowPlaying => "SHOW_PLAYING",
            Command::CreatePlaylist { .. } => "CREATE_PLAYLIST",
            Command::AddToPlaylist { .. } => "ADD_TO_PLAYLIST",
            Command::RemoveFromPlaylist { .. } => "REMOVE_FROM_PLAYLIST",
            Command::ClearPlaylist { .. } => "CLEAR_PLAYLIST",
            Command::DeletePlaylist { .. } => "DELETE_PLAYLIST",
            Command::ShowAllPlaylists => "SHOW_ALL_PLAYLISTS",
            Command::ShowPlaylist { .. } => "SHOW_PLAYLIST",
            Command::SearchVideos { .. } => "SEARCH_VIDEOS",
            Command::SearchVideosWithTag { .. } => "SEARCH_VIDEOS_WITH_TAG",
            Command::FlagVideo { .. } => "FLAG_VIDEO",
            Command::AllowVideo { .. } => "ALLOW_VIDEO",
        },
    }
}

/// Cursor over the tokens of one line
struct Args {
    tokens: std::vec::IntoIter<String>,
}

impl Args {
    fn new(tokens: Vec<String>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }

    fn keyword(&mut self) -> Result<String, ParseError> {
        self.tokens
            .next()
            .map(|k| k.to_uppercase())
            .ok_or(ParseError::Empty)
    }

    fn required(
        &mut self,
        command: &'static str,
        argument: &'static str,
    ) -> Result<String, ParseError> {
        self.tokens
            .next()
            .ok_or(ParseError::MissingArgument { command, argument })
    }

    fn video_id(&mut self, command: &'static str) -> Result<VideoId, ParseError> {
        self.required(command, "a video id").map(VideoId::new)
    }

    fn playlist(&mut self, command: &'static str) -> Result<String, ParseError> {
        self.required(command, "a playlist name")
    }

    /// Remaining tokens joined with single spaces
    fn rest(
        &mut self,
        command: &'static str,
        argument: &'static str,
    ) -> Result<String, ParseError> {
        let rest: Vec<String> = self.tokens.by_ref().collect();
        if rest.is_empty() {
            return Err(ParseError::MissingArgument { command, argument });
        }
        Ok(rest.join(" "))
    }

    fn finish(mut self, command: &'static str) -> Result<(), ParseError> {
        match self.tokens.next() {
            Some(argument) => Err(ParseError::UnexpectedArgument { command, argument }),
            None => Ok(()),
        }
    }
}
