//! Error types for the translation session and its collaborators

use morsecode_codecs::CodecError;
use morsecode_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Permission denied while writing {path:?}")]
    PermissionDenied { path: PathBuf },

    #[error("Audio file {path:?} doesn't exist")]
    MissingAudio { path: PathBuf },

    #[error("Playback failed: {msg}")]
    Playback { msg: String },

    #[error("Clipboard unavailable: {msg}")]
    Clipboard { msg: String },

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Audio error: {0}")]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ToolError {
    pub fn is_permission_denied(&self) -> bool {
        match self {
            ToolError::PermissionDenied { .. } => true,
            ToolError::Core(e) => e.is_permission_denied(),
            ToolError::Codec(CodecError::Core(e)) => e.is_permission_denied(),
            ToolError::Io(e) => e.kind() == std::io::ErrorKind::PermissionDenied,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;
