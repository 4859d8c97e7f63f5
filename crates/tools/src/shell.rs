//! Interactive line-based front end
//!
//! Reads one command per line and reports outcomes the way the desktop
//! front end would in its dialogs: warnings and errors are printed, and the
//! shell keeps going.

use crate::clipboard::Clipboard;
use crate::messages;
use crate::prompt::LineConfirm;
use crate::session::{AudioOutcome, CopyOutcome, PlayOutcome, Session};
use morsecode_codecs::table::MORSE_TABLE;
use morsecode_codecs::{CodecError, Direction};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  morse <text>     translate plain text to Morse code
  text <morse>     translate Morse code to plain text
  audio on|off     render audio after each translation
  play             play the most recent audio file
  copy             copy the last translation to the clipboard
  clear            clear the last translation and audio file
  status           show the audio status
  table            list supported characters
  help             show this help
  quit             leave the shell";

pub struct Shell<R, W> {
    session: Session,
    clipboard: Box<dyn Clipboard>,
    input: R,
    output: W,
    wants_audio: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(session: Session, clipboard: Box<dyn Clipboard>, input: R, output: W) -> Self {
        Self {
            session,
            clipboard,
            input,
            output,
            wants_audio: false,
        }
    }

    /// Run until `quit` or end of input
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Type 'help' for commands.")?;
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(());
            }
            let line = line.trim_end_matches(['\r', '\n']);
            let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

            match command.trim() {
                "" => {}
                "morse" => self.translate(Direction::ToMorse, rest)?,
                "text" => self.translate(Direction::ToText, rest)?,
                "audio" => self.set_audio(rest.trim())?,
                "play" => self.play()?,
                "copy" => self.copy()?,
                "clear" => {
                    self.session.clear_all();
                    writeln!(self.output, "Cleared.")?;
                }
                "status" => {
                    let status = self.session.audio_status();
                    writeln!(self.output, "Audio: {}", if status.is_empty() { "-" } else { status })?;
                }
                "table" => self.print_table()?,
                "help" => writeln!(self.output, "{}", HELP)?,
                "quit" | "exit" => return Ok(()),
                other => writeln!(self.output, "Unknown command '{}'. Type 'help' for commands.", other)?,
            }
        }
    }

    fn translate(&mut self, direction: Direction, input: &str) -> io::Result<()> {
        let mut confirm = LineConfirm::new(&mut self.input, &mut self.output);
        let result = self.session.translate(direction, input, self.wants_audio, &mut confirm);

        match result {
            Ok(report) => {
                writeln!(self.output, "{}", report.translation.output)?;
                report_audio(&mut self.output, &report.audio)
            }
            Err(err) => writeln!(self.output, "Warning: {}", codec_warning(&err)),
        }
    }

    fn set_audio(&mut self, arg: &str) -> io::Result<()> {
        match arg {
            "on" => self.wants_audio = true,
            "off" => self.wants_audio = false,
            _ => return writeln!(self.output, "Usage: audio on|off"),
        }
        writeln!(self.output, "Audio {}.", if self.wants_audio { "on" } else { "off" })
    }

    fn play(&mut self) -> io::Result<()> {
        match self.session.play_most_recent() {
            PlayOutcome::NothingToPlay => writeln!(self.output, "Warning: {}", messages::NOTHING_TO_PLAY),
            PlayOutcome::Played => Ok(()),
            PlayOutcome::PlaybackFailed(detail) => writeln!(self.output, "Error: {}", detail),
        }
    }

    fn copy(&mut self) -> io::Result<()> {
        let text = self.session.last_output().unwrap_or_default().to_string();
        match self.session.copy(&text, self.clipboard.as_mut()) {
            Ok(CopyOutcome::NothingToCopy) => writeln!(self.output, "Warning: {}", messages::NOTHING_TO_COPY),
            Ok(CopyOutcome::Copied) => writeln!(self.output, "{}", messages::COPY_SUCCESS),
            Err(err) => writeln!(self.output, "Error: {}", err),
        }
    }

    fn print_table(&mut self) -> io::Result<()> {
        for (ch, code) in MORSE_TABLE {
            writeln!(self.output, "{}  {}", ch, code)?;
        }
        Ok(())
    }
}

/// User-facing wording for a failed translation
pub fn codec_warning(err: &CodecError) -> String {
    match err {
        CodecError::EmptyInput => messages::NOTHING_TO_TRANSLATE.to_string(),
        CodecError::InvalidMorse { .. } => messages::ONLY_MORSE_SYMBOLS.to_string(),
        CodecError::Meaningless { direction: Direction::ToMorse } => messages::MEANINGLESS_TO_MORSE.to_string(),
        CodecError::Meaningless { direction: Direction::ToText } => messages::MEANINGLESS_TO_TEXT.to_string(),
        other => other.to_string(),
    }
}

/// Print what happened to an audio request
pub fn report_audio<W: Write>(output: &mut W, outcome: &AudioOutcome) -> io::Result<()> {
    match outcome {
        AudioOutcome::NoAudioRequested | AudioOutcome::UserDeclined => Ok(()),
        AudioOutcome::NothingToRender => writeln!(output, "Warning: {}", messages::MEANINGLESS_TO_MORSE),
        AudioOutcome::Rendered(path) => writeln!(output, "{} {}", messages::AUDIO_READY, path.display()),
        AudioOutcome::WriteFailed { permission_denied: true, .. } => {
            writeln!(output, "Error: {}", messages::NO_WRITE_PERMISSION)
        }
        AudioOutcome::WriteFailed { reason, .. } => writeln!(output, "Error: {}", reason),
    }
}
