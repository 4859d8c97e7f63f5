//! Morse Code Codecs - text <-> Morse translation
//!
//! This crate provides the symbol table, input normalization, the
//! bidirectional translator and the keyed-tone generator used for audio.

pub mod table;
pub mod normalize;
pub mod morse;
pub mod cw;
pub mod error;

pub use error::{CodecError, Direction, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        morse::{decode, encode, translate_to_morse, translate_to_text, Translation},
        normalize::{has_audio_unsupported, normalize_text, strip_audio_unsupported},
        cw::{CwConfig, CwGenerator},
        error::{CodecError, Direction, Result},
    };
}
