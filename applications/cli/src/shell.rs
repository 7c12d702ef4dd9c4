//! Interactive command shell
//!
//! Reads one command per line, runs it against a `LibrarySession`, and writes
//! the rendered result. Generic over reader and writer so scripted sessions
//! can be driven from memory.

use crate::config::OutputFormat;
use crate::parser::{parse_line, Input, COMMANDS};
use crate::render::{
    error_json, outcome_json, render_error, render_outcome, SELECTION_PROMPT,
};
use reel_core::{InMemoryCatalog, VideoCatalog};
use reel_playback::{Command, LibrarySession, Outcome};
use std::io::{self, BufRead, Write};

const WELCOME: [&str; 2] = [
    "Hello and welcome to Reel, what would you like to do?",
    "Enter HELP for list of available commands or EXIT to terminate.",
];
const PROMPT: &str = "REEL> ";
const INVALID_COMMAND: &str =
    "Please enter a valid command, type HELP for a list of available commands.";
const GOODBYE: &str = "Reel player exiting...";

/// How input is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Banner, prompt, and goodbye message
    Interactive,

    /// Rendered output only
    Script,
}

pub struct Shell<C: VideoCatalog = InMemoryCatalog> {
    session: LibrarySession<C>,
    format: OutputFormat,
    mode: Mode,
}

impl<C: VideoCatalog> Shell<C> {
    pub fn new(session: LibrarySession<C>, format: OutputFormat, mode: Mode) -> Self {
        Self {
            session,
            format,
            mode,
        }
    }

    pub fn session(&self) -> &LibrarySession<C> {
        &self.session
    }

    /// Run until `EXIT` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        if self.mode == Mode::Interactive {
            for line in WELCOME {
                writeln!(output, "{line}")?;
            }
        }

        let mut lines = LineReader::new(input);
        loop {
            self.prompt(&mut output)?;
            let Some(line) = lines.next_line()? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match parse_line(&line) {
                Ok(Input::Exit) => break,
                Ok(Input::Help) => self.write_help(&mut output)?,
                Ok(Input::Command(command)) => {
                    self.dispatch(command, &mut lines, &mut output)?;
                }
                Err(err) => {
                    tracing::debug!("Rejected input {:?}: {}", line, err);
                    self.write_parse_error(&err.to_string(), &mut output)?;
                }
            }
        }

        if self.mode == Mode::Interactive {
            writeln!(output, "{GOODBYE}")?;
        }
        output.flush()
    }

    fn dispatch<R: BufRead, W: Write>(
        &mut self,
        command: Command,
        lines: &mut LineReader<R>,
        output: &mut W,
    ) -> io::Result<()> {
        let result = self.session.execute(command.clone());
        self.write_result(&command, &result, output)?;

        // Offer to play one of the numbered results
        if let Ok(Outcome::SearchResults { results, .. }) = &result {
            if self.format == OutputFormat::Text && !results.is_empty() {
                for line in SELECTION_PROMPT {
                    writeln!(output, "{line}")?;
                }
                output.flush()?;

                if let Some(video) = self
                    .read_selection(lines)?
                    .and_then(|number| results.get_numbered(number))
                {
                    let play = Command::Play {
                        video_id: video.id.clone(),
                    };
                    let played = self.session.execute(play.clone());
                    self.write_result(&play, &played, output)?;
                }
            }
        }

        Ok(())
    }

    /// Read the answer to the selection prompt
    ///
    /// Interactively any answer is consumed. A script only answers with a
    /// number; any other line is left for the command loop.
    fn read_selection<R: BufRead>(&self, lines: &mut LineReader<R>) -> io::Result<Option<usize>> {
        let Some(answer) = lines.next_line()? else {
            return Ok(None);
        };
        match answer.trim().parse::<usize>() {
            Ok(number) => Ok(Some(number)),
            Err(_) => {
                if self.mode == Mode::Script {
                    lines.push_back(answer);
                }
                Ok(None)
            }
        }
    }

    fn write_result<W: Write>(
        &self,
        command: &Command,
        result: &reel_playback::Result<Outcome>,
        output: &mut W,
    ) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                let lines = match result {
                    Ok(outcome) => render_outcome(outcome),
                    Err(err) => vec![render_error(command, err)],
                };
                for line in lines {
                    writeln!(output, "{line}")?;
                }
            }
            OutputFormat::Json => {
                let value = match result {
                    Ok(outcome) => outcome_json(outcome),
                    Err(err) => error_json(command, err),
                };
                writeln!(output, "{value}")?;
            }
        }
        Ok(())
    }

    fn write_parse_error<W: Write>(&self, detail: &str, output: &mut W) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(output, "{INVALID_COMMAND}"),
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "error": {
                        "kind": "invalid_command",
                        "message": INVALID_COMMAND,
                        "detail": detail,
                    }
                });
                writeln!(output, "{value}")
            }
        }
    }

    fn write_help<W: Write>(&self, output: &mut W) -> io::Result<()> {
        writeln!(output, "Available commands:")?;
        for (usage, description) in COMMANDS {
            writeln!(output, "    {usage} - {description}")?;
        }
        Ok(())
    }

    fn prompt<W: Write>(&self, output: &mut W) -> io::Result<()> {
        if self.mode == Mode::Interactive {
            write!(output, "{PROMPT}")?;
            output.flush()?;
        }
        Ok(())
    }
}

/// Line source that tolerates invalid UTF-8 and supports one line of lookahead
struct LineReader<R> {
    input: R,
    pending: Option<String>,
}

impl<R: BufRead> LineReader<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: None,
        }
    }

    /// Next line without its terminator, or `None` at end of input
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than treated as an
    /// I/O failure, so a garbled line becomes an invalid command.
    fn next_line(&mut self) -> io::Result<Option<String>> {
        if let Some(line) = self.pending.take() {
            return Ok(Some(line));
        }

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn push_back(&mut self, line: String) {
        self.pending = Some(line);
    }
}
