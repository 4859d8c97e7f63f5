//! Audio rendering and playback backends

use crate::error::{Result, ToolError};
use morsecode_codecs::cw::{CwConfig, CwGenerator};
use morsecode_core::wav::write_wav_file;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

/// Renders normalized text to an audio file
pub trait AudioRenderer {
    fn render(&self, text: &str, settings: &CwConfig, path: &Path) -> Result<()>;
}

/// Plays an audio file, blocking until playback ends
pub trait AudioPlayer {
    fn play(&self, path: &Path) -> Result<()>;
}

/// Keyed sine tone written as 16-bit mono WAV
#[derive(Debug, Default, Clone, Copy)]
pub struct WavRenderer;

impl AudioRenderer for WavRenderer {
    fn render(&self, text: &str, settings: &CwConfig, path: &Path) -> Result<()> {
        let generator = CwGenerator::new(settings.clone())?;
        let buffer = generator.generate_cw_audio(text)?;

        write_wav_file(&buffer, path).map_err(|e| {
            if e.is_permission_denied() {
                ToolError::PermissionDenied { path: path.to_path_buf() }
            } else {
                e.into()
            }
        })?;

        info!("Rendered {:.2}s of CW to {:?}", buffer.duration_seconds(), path);
        Ok(())
    }
}

/// Plays WAV files through the platform's command-line player
#[derive(Debug, Clone)]
pub struct CommandPlayer {
    program: String,
    args: Vec<String>,
}

impl Default for CommandPlayer {
    fn default() -> Self {
        if cfg!(target_os = "macos") {
            Self::new("afplay", &[])
        } else if cfg!(target_os = "windows") {
            Self::new("powershell", &["-NoProfile", "-Command"])
        } else {
            Self::new("aplay", &["-q"])
        }
    }
}

impl CommandPlayer {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    fn command_for(&self, path: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if self.program == "powershell" {
            command.arg(powershell_play_script(path));
        } else {
            command.arg(path);
        }
        command
    }
}

/// PowerShell one-liner playing `path`; single quotes are doubled for the literal
fn powershell_play_script(path: &Path) -> String {
    format!(
        "(New-Object Media.SoundPlayer '{}').PlaySync()",
        path.display().to_string().replace('\'', "''")
    )
}

impl AudioPlayer for CommandPlayer {
    fn play(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(ToolError::MissingAudio { path: path.to_path_buf() });
        }

        // Refuse anything that is not a readable WAV before handing it off
        let spec = hound::WavReader::open(path)
            .map_err(|e| ToolError::Playback { msg: format!("{:?} is not a playable WAV file: {}", path, e) })?
            .spec();
        debug!("Playing {:?} ({} Hz, {} ch)", path, spec.sample_rate, spec.channels);

        let status = self.command_for(path).status().map_err(|e| ToolError::Playback {
            msg: format!("failed to start {}: {}", self.program, e),
        })?;

        if !status.success() {
            return Err(ToolError::Playback {
                msg: format!("{} exited with {}", self.program, status),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wav_renderer_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sos.wav");

        WavRenderer.render("SOS", &CwConfig::default(), &path).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.spec().sample_rate, 44100);
        assert_eq!(reader.spec().channels, 1);
        assert!(reader.duration() > 0);
    }

    #[test]
    fn test_wav_renderer_rejects_bad_settings() {
        let dir = tempfile::tempdir().unwrap();
        let settings = CwConfig::new(0, 800.0, 1.0, 44100);
        assert!(WavRenderer.render("E", &settings, &dir.path().join("e.wav")).is_err());
    }

    #[test]
    fn test_powershell_script_quotes_path() {
        assert_eq!(
            powershell_play_script(Path::new("C:\\it's.wav")),
            "(New-Object Media.SoundPlayer 'C:\\it''s.wav').PlaySync()"
        );
    }

    #[test]
    fn test_player_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CommandPlayer::default().play(&dir.path().join("gone.wav")).unwrap_err();
        assert!(matches!(err, ToolError::MissingAudio { .. }));
    }

    #[test]
    fn test_player_rejects_non_wav() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.wav");
        std::fs::write(&path, b"not audio").unwrap();

        let err = CommandPlayer::new("true", &[]).play(&path).unwrap_err();
        assert!(matches!(err, ToolError::Playback { .. }));
    }
}
