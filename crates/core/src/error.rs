//! Error types for the Morse code core crate

use thiserror::Error;

/// Core error types
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid sample rate: {rate}")]
    InvalidSampleRate { rate: f64 },

    #[error("Invalid volume: {volume} (expected 0.0 to 1.0)")]
    InvalidVolume { volume: f64 },

    #[error("Permission denied while writing {path}")]
    PermissionDenied { path: String },

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// True when the failure came from the OS refusing write access
    pub fn is_permission_denied(&self) -> bool {
        match self {
            CoreError::PermissionDenied { .. } => true,
            CoreError::Io(e) => e.kind() == std::io::ErrorKind::PermissionDenied,
            CoreError::Wav(hound::Error::IoError(e)) => {
                e.kind() == std::io::ErrorKind::PermissionDenied
            }
            _ => false,
        }
    }
}

/// Result type for Morse code core operations
pub type Result<T> = std::result::Result<T, CoreError>;
