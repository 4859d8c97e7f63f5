//! Translation session and audio request policy
//!
//! A [`Session`] owns the only mutable state of the translator: the path of
//! the most recently rendered audio file and the status line shown for it.
//! Every operation runs to completion on the caller's thread.

use crate::audio::{AudioPlayer, AudioRenderer};
use crate::clipboard::Clipboard;
use crate::config::AppConfig;
use crate::error::{Result, ToolError};
use crate::messages::{AUDIO_READY, CONFIRM_AUDIO_CLEANUP};
use crate::output::next_free_path;
use crate::prompt::Confirm;
use morsecode_codecs::morse::{translate_to_morse, translate_to_text, Translation};
use morsecode_codecs::normalize::{has_audio_unsupported, strip_audio_unsupported};
use morsecode_codecs::table::is_supported;
use morsecode_codecs::{CodecError, Direction};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Most recently rendered audio file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AudioSlot {
    #[default]
    Empty,
    Holding(PathBuf),
}

impl AudioSlot {
    pub fn path(&self) -> Option<&Path> {
        match self {
            AudioSlot::Empty => None,
            AudioSlot::Holding(path) => Some(path),
        }
    }
}

/// Result of an audio request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioOutcome {
    NoAudioRequested,
    UserDeclined,
    /// Nothing keyable was left after removing unsupported characters
    NothingToRender,
    Rendered(PathBuf),
    WriteFailed { reason: String, permission_denied: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    NothingToPlay,
    Played,
    PlaybackFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    NothingToCopy,
    Copied,
}

/// A translation plus whatever happened to its audio
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateReport {
    pub translation: Translation,
    pub audio: AudioOutcome,
}

pub struct Session {
    config: AppConfig,
    renderer: Box<dyn AudioRenderer>,
    player: Box<dyn AudioPlayer>,
    slot: AudioSlot,
    audio_status: String,
    last_output: Option<String>,
}

impl Session {
    pub fn new(config: AppConfig, renderer: Box<dyn AudioRenderer>, player: Box<dyn AudioPlayer>) -> Self {
        Self {
            config,
            renderer,
            player,
            slot: AudioSlot::Empty,
            audio_status: String::new(),
            last_output: None,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn slot(&self) -> &AudioSlot {
        &self.slot
    }

    /// Status line for the audio file; empty until something is rendered
    pub fn audio_status(&self) -> &str {
        &self.audio_status
    }

    pub fn last_output(&self) -> Option<&str> {
        self.last_output.as_deref()
    }

    fn clear_audio(&mut self) {
        if let AudioSlot::Holding(path) = &self.slot {
            debug!("Forgetting audio file {:?}", path);
        }
        self.slot = AudioSlot::Empty;
        self.audio_status.clear();
    }

    /// Translate `input` in `direction` and optionally render it
    ///
    /// Meaningless input clears the audio slot before the error is returned.
    /// Empty and malformed input leave the session untouched.
    pub fn translate(
        &mut self,
        direction: Direction,
        input: &str,
        wants_audio: bool,
        confirm: &mut dyn Confirm,
    ) -> std::result::Result<TranslateReport, CodecError> {
        let result = match direction {
            Direction::ToMorse => translate_to_morse(input),
            Direction::ToText => translate_to_text(input),
        };

        let translation = match result {
            Ok(translation) => translation,
            Err(err @ CodecError::Meaningless { .. }) => {
                info!("Meaningless input for {}", direction);
                self.clear_audio();
                return Err(err);
            }
            Err(err) => return Err(err),
        };

        self.last_output = Some(translation.output.clone());
        let audio = self.request_audio(&translation.audio_text, wants_audio, confirm);
        Ok(TranslateReport { translation, audio })
    }

    /// Decide whether and how to render `text`, and render it
    pub fn request_audio(&mut self, text: &str, wants_audio: bool, confirm: &mut dyn Confirm) -> AudioOutcome {
        if !wants_audio {
            self.clear_audio();
            return AudioOutcome::NoAudioRequested;
        }

        let mut text = text.to_string();
        if has_audio_unsupported(&text) {
            if !confirm.confirm(CONFIRM_AUDIO_CLEANUP) {
                info!("Audio declined: input has unsupported characters");
                self.clear_audio();
                return AudioOutcome::UserDeclined;
            }
            text = strip_audio_unsupported(&text);
        }

        if !text.chars().any(is_supported) {
            self.clear_audio();
            return AudioOutcome::NothingToRender;
        }

        match self.render_to_free_path(&text) {
            Ok(path) => {
                self.audio_status = format!("{} {}", AUDIO_READY, path.display());
                self.slot = AudioSlot::Holding(path.clone());
                AudioOutcome::Rendered(path)
            }
            Err(err) => {
                // The previous file stays playable
                warn!("Audio render failed: {}", err);
                AudioOutcome::WriteFailed {
                    permission_denied: err.is_permission_denied(),
                    reason: err.to_string(),
                }
            }
        }
    }

    fn render_to_free_path(&self, text: &str) -> Result<PathBuf> {
        let path = next_free_path(&self.config.output_dir, &self.config.file_name)?;
        self.renderer.render(text, &self.config.audio, &path)?;
        Ok(path)
    }

    /// Play the most recent file; gated on the status line being set
    pub fn play_most_recent(&self) -> PlayOutcome {
        if self.audio_status.is_empty() {
            return PlayOutcome::NothingToPlay;
        }
        let Some(path) = self.slot.path() else {
            return PlayOutcome::NothingToPlay;
        };

        match self.player.play(path) {
            Ok(()) => PlayOutcome::Played,
            Err(err) => {
                warn!("Playback of {:?} failed: {}", path, err);
                let detail = match err {
                    ToolError::MissingAudio { .. } => crate::messages::AUDIO_FILE_MISSING.to_string(),
                    other => other.to_string(),
                };
                PlayOutcome::PlaybackFailed(detail)
            }
        }
    }

    /// Put `text` on the clipboard
    pub fn copy(&self, text: &str, clipboard: &mut dyn Clipboard) -> Result<CopyOutcome> {
        if text.is_empty() {
            return Ok(CopyOutcome::NothingToCopy);
        }
        clipboard.copy(text)?;
        Ok(CopyOutcome::Copied)
    }

    /// Forget the last translation and audio file
    pub fn clear_all(&mut self) {
        self.last_output = None;
        self.clear_audio();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::AutoConfirm;
    use morsecode_codecs::cw::CwConfig;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Writes a placeholder file and records what it was asked to render
    #[derive(Default, Clone)]
    struct RecordingRenderer {
        texts: Rc<RefCell<Vec<String>>>,
    }

    impl AudioRenderer for RecordingRenderer {
        fn render(&self, text: &str, _settings: &CwConfig, path: &Path) -> Result<()> {
            std::fs::write(path, b"RIFF")?;
            self.texts.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    struct DeniedRenderer;

    impl AudioRenderer for DeniedRenderer {
        fn render(&self, _text: &str, _settings: &CwConfig, path: &Path) -> Result<()> {
            Err(ToolError::PermissionDenied { path: path.to_path_buf() })
        }
    }

    #[derive(Default, Clone)]
    struct RecordingPlayer {
        played: Rc<RefCell<Vec<PathBuf>>>,
    }

    impl AudioPlayer for RecordingPlayer {
        fn play(&self, path: &Path) -> Result<()> {
            if !path.exists() {
                return Err(ToolError::MissingAudio { path: path.to_path_buf() });
            }
            self.played.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    struct CountingConfirm {
        answer: bool,
        asked: Cell<usize>,
    }

    impl Confirm for CountingConfirm {
        fn confirm(&mut self, _question: &str) -> bool {
            self.asked.set(self.asked.get() + 1);
            self.answer
        }
    }

    #[derive(Default)]
    struct MemoryClipboard {
        contents: Option<String>,
    }

    impl Clipboard for MemoryClipboard {
        fn copy(&mut self, text: &str) -> Result<()> {
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    fn session_in(dir: &Path) -> (Session, RecordingRenderer, RecordingPlayer) {
        let renderer = RecordingRenderer::default();
        let player = RecordingPlayer::default();
        let config = AppConfig {
            output_dir: dir.join("output"),
            ..AppConfig::default()
        };
        let session = Session::new(config, Box::new(renderer.clone()), Box::new(player.clone()));
        (session, renderer, player)
    }

    #[test]
    fn test_initial_state() {
        let dir = tempfile::tempdir().unwrap();
        let (session, _, _) = session_in(dir.path());
        assert_eq!(session.slot(), &AudioSlot::Empty);
        assert_eq!(session.audio_status(), "");
        assert_eq!(session.play_most_recent(), PlayOutcome::NothingToPlay);
    }

    #[test]
    fn test_translate_without_audio() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, renderer, _) = session_in(dir.path());

        let report = session
            .translate(Direction::ToMorse, "2 SeAs", false, &mut AutoConfirm(true))
            .unwrap();
        assert_eq!(report.translation.output, "..--- / ... . .- ...");
        assert_eq!(report.audio, AudioOutcome::NoAudioRequested);
        assert_eq!(session.last_output(), Some("..--- / ... . .- ..."));
        assert!(renderer.texts.borrow().is_empty());
        assert!(!dir.path().join("output").exists());
    }

    #[test]
    fn test_render_then_play() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, renderer, player) = session_in(dir.path());

        let report = session
            .translate(Direction::ToText, "..--- / ... . .- ...", true, &mut AutoConfirm(false))
            .unwrap();
        let expected = dir.path().join("output").join("morse_code_audio.wav");
        assert_eq!(report.audio, AudioOutcome::Rendered(expected.clone()));
        assert_eq!(session.slot(), &AudioSlot::Holding(expected.clone()));
        assert_eq!(session.audio_status(), format!("READY: {}", expected.display()));
        assert_eq!(renderer.texts.borrow().as_slice(), ["2 SEAS"]);

        assert_eq!(session.play_most_recent(), PlayOutcome::Played);
        assert_eq!(player.played.borrow().as_slice(), [expected]);
    }

    #[test]
    fn test_repeated_renders_never_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, _, _) = session_in(dir.path());
        let out = dir.path().join("output");

        let mut paths = Vec::new();
        for _ in 0..3 {
            match session.request_audio("SOS", true, &mut AutoConfirm(true)) {
                AudioOutcome::Rendered(path) => paths.push(path),
                other => panic!("unexpected outcome {:?}", other),
            }
        }
        assert_eq!(
            paths,
            vec![
                out.join("morse_code_audio.wav"),
                out.join("morse_code_audio_1.wav"),
                out.join("morse_code_audio_2.wav"),
            ]
        );
        assert_eq!(session.slot(), &AudioSlot::Holding(out.join("morse_code_audio_2.wav")));
    }

    #[test]
    fn test_unsupported_characters_declined() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, renderer, _) = session_in(dir.path());
        session.request_audio("SOS", true, &mut AutoConfirm(true));
        assert!(session.slot().path().is_some());

        let mut confirm = CountingConfirm { answer: false, asked: Cell::new(0) };
        let report = session.translate(Direction::ToMorse, "#test@", true, &mut confirm).unwrap();

        assert_eq!(confirm.asked.get(), 1);
        assert_eq!(report.audio, AudioOutcome::UserDeclined);
        assert_eq!(report.translation.output, "- . ... - .--.-.");
        assert_eq!(session.slot(), &AudioSlot::Empty);
        assert_eq!(session.audio_status(), "");
        assert_eq!(renderer.texts.borrow().len(), 1);
    }

    #[test]
    fn test_unsupported_characters_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, renderer, _) = session_in(dir.path());

        let mut confirm = CountingConfirm { answer: true, asked: Cell::new(0) };
        let report = session.translate(Direction::ToMorse, "#test@ 1<2", true, &mut confirm).unwrap();

        assert_eq!(confirm.asked.get(), 1);
        assert!(matches!(report.audio, AudioOutcome::Rendered(_)));
        assert_eq!(renderer.texts.borrow().as_slice(), ["TEST 12"]);
    }

    #[test]
    fn test_supported_text_is_not_confirmed() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, _, _) = session_in(dir.path());

        let mut confirm = CountingConfirm { answer: false, asked: Cell::new(0) };
        let outcome = session.request_audio("CQ CQ DE SP5", true, &mut confirm);
        assert_eq!(confirm.asked.get(), 0);
        assert!(matches!(outcome, AudioOutcome::Rendered(_)));
    }

    #[test]
    fn test_nothing_left_after_cleanup() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, renderer, _) = session_in(dir.path());
        session.request_audio("E", true, &mut AutoConfirm(true));

        let outcome = session.request_audio("@#", true, &mut AutoConfirm(true));
        assert_eq!(outcome, AudioOutcome::NothingToRender);
        assert_eq!(session.slot(), &AudioSlot::Empty);
        assert_eq!(renderer.texts.borrow().len(), 1);
    }

    #[test]
    fn test_lone_separator_translates_but_renders_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, renderer, _) = session_in(dir.path());

        let report = session
            .translate(Direction::ToMorse, "{ }", true, &mut AutoConfirm(true))
            .unwrap();
        assert_eq!(report.translation.output, "/");
        assert_eq!(report.audio, AudioOutcome::NothingToRender);
        assert!(renderer.texts.borrow().is_empty());
    }

    #[test]
    fn test_meaningless_input_clears_slot() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, _, _) = session_in(dir.path());
        session.request_audio("SOS", true, &mut AutoConfirm(true));
        assert!(!session.audio_status().is_empty());

        let err = session
            .translate(Direction::ToText, "-----------", true, &mut AutoConfirm(true))
            .unwrap_err();
        assert!(matches!(err, CodecError::Meaningless { direction: Direction::ToText }));
        assert_eq!(session.slot(), &AudioSlot::Empty);
        assert_eq!(session.audio_status(), "");
        assert_eq!(session.play_most_recent(), PlayOutcome::NothingToPlay);
    }

    #[test]
    fn test_empty_and_invalid_input_keep_state() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, _, _) = session_in(dir.path());
        session.request_audio("SOS", true, &mut AutoConfirm(true));
        let before = session.slot().clone();

        assert!(matches!(
            session.translate(Direction::ToMorse, "", true, &mut AutoConfirm(true)),
            Err(CodecError::EmptyInput)
        ));
        assert!(matches!(
            session.translate(Direction::ToText, "#$gaw", true, &mut AutoConfirm(true)),
            Err(CodecError::InvalidMorse { .. })
        ));
        assert_eq!(session.slot(), &before);
        assert!(!session.audio_status().is_empty());
    }

    #[test]
    fn test_declining_audio_clears_slot() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, _, _) = session_in(dir.path());
        session.request_audio("SOS", true, &mut AutoConfirm(true));

        session.translate(Direction::ToMorse, "SOS", false, &mut AutoConfirm(true)).unwrap();
        assert_eq!(session.slot(), &AudioSlot::Empty);
        assert_eq!(session.audio_status(), "");
    }

    #[test]
    fn test_write_failure_keeps_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            output_dir: dir.path().to_path_buf(),
            ..AppConfig::default()
        };
        let mut session = Session::new(config, Box::new(DeniedRenderer), Box::new(RecordingPlayer::default()));
        let previous = dir.path().join("earlier.wav");
        session.slot = AudioSlot::Holding(previous.clone());
        session.audio_status = format!("READY: {}", previous.display());

        match session.request_audio("SOS", true, &mut AutoConfirm(true)) {
            AudioOutcome::WriteFailed { permission_denied, .. } => assert!(permission_denied),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(session.slot(), &AudioSlot::Holding(previous));
        assert!(!session.audio_status().is_empty());
    }

    #[test]
    fn test_playback_of_deleted_file() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, _, _) = session_in(dir.path());

        let AudioOutcome::Rendered(path) = session.request_audio("SOS", true, &mut AutoConfirm(true)) else {
            panic!("render failed");
        };
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            session.play_most_recent(),
            PlayOutcome::PlaybackFailed(crate::messages::AUDIO_FILE_MISSING.to_string())
        );
    }

    #[test]
    fn test_copy() {
        let dir = tempfile::tempdir().unwrap();
        let (session, _, _) = session_in(dir.path());
        let mut clipboard = MemoryClipboard::default();

        assert_eq!(session.copy("", &mut clipboard).unwrap(), CopyOutcome::NothingToCopy);
        assert_eq!(clipboard.contents, None);
        assert_eq!(session.copy("... --- ...", &mut clipboard).unwrap(), CopyOutcome::Copied);
        assert_eq!(clipboard.contents.as_deref(), Some("... --- ..."));
    }

    #[test]
    fn test_clear_all() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, _, _) = session_in(dir.path());
        session.translate(Direction::ToMorse, "SOS", true, &mut AutoConfirm(true)).unwrap();

        session.clear_all();
        assert_eq!(session.slot(), &AudioSlot::Empty);
        assert_eq!(session.audio_status(), "");
        assert_eq!(session.last_output(), None);
    }
}
