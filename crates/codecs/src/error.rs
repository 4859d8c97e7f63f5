//! Error types for Morse code translation

use std::fmt;
use thiserror::Error;

/// Translation direction, used to pick the right user-facing wording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    ToMorse,
    ToText,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::ToMorse => write!(f, "text to Morse"),
            Direction::ToText => write!(f, "Morse to text"),
        }
    }
}

/// Codec error types
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Nothing to translate")]
    EmptyInput,

    #[error("Invalid Morse input: unexpected character {ch:?} at position {position}")]
    InvalidMorse { ch: char, position: usize },

    #[error("Input has no translatable content ({direction})")]
    Meaningless { direction: Direction },

    #[error("Invalid tone configuration: {msg}")]
    InvalidParameters { msg: String },

    #[error("Core error: {0}")]
    Core(#[from] morsecode_core::CoreError),
}

/// Result type for Morse codec operations
pub type Result<T> = std::result::Result<T, CodecError>;
