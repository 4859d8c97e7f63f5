//! Morse Code Core - sample buffers and WAV output
//!
//! This crate provides the audio sample buffer produced by the keyed-tone
//! generator and the WAV reader/writer used to persist it.

pub mod buffer;
pub mod wav;
pub mod error;

pub use error::{CoreError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        buffer::AudioBuffer,
        wav::{read_wav_file, write_wav_file},
        error::{CoreError, Result},
    };
}
