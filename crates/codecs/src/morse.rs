//! Bidirectional text <-> Morse code translation

use crate::error::{CodecError, Direction, Result};
use crate::normalize::{collapse_whitespace, first_invalid_morse_char, normalize_text};
use crate::table::{char_for, code_for};
use tracing::debug;

/// Separator placed between encoded words
pub const WORD_SEPARATOR: &str = " / ";

/// A successful translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub direction: Direction,
    /// Text shown to the user
    pub output: String,
    /// Plain text handed to the audio renderer
    pub audio_text: String,
}

/// Encode already-normalized text
///
/// Characters without a code are dropped. A word left with no codes still
/// takes part in the `" / "` join, so its separator survives.
pub fn encode_normalized(normalized: &str) -> String {
    normalized
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter_map(code_for)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(WORD_SEPARATOR)
        .trim()
        .to_string()
}

/// Normalize and encode arbitrary text
///
/// An empty result is returned as-is; use [`translate_to_morse`] to have it
/// reported as meaningless input.
pub fn encode(text: &str) -> String {
    encode_normalized(&normalize_text(text))
}

/// Decode a Morse document
///
/// Fails only when the input contains characters outside `.`, `-`, `/` and
/// space. Unknown codewords are dropped, so the result may be empty.
pub fn decode(morse: &str) -> Result<String> {
    if let Some((position, ch)) = first_invalid_morse_char(morse) {
        return Err(CodecError::InvalidMorse { ch, position });
    }

    let reduced = collapse_whitespace(morse);
    let text = reduced
        .split(WORD_SEPARATOR)
        .map(|word| word.split_whitespace().filter_map(char_for).collect::<String>())
        .collect::<Vec<_>>()
        .join(" ");

    Ok(text.trim().to_string())
}

/// Translate user text to Morse, classifying empty and meaningless input
pub fn translate_to_morse(text: &str) -> Result<Translation> {
    if text.is_empty() {
        return Err(CodecError::EmptyInput);
    }

    let normalized = normalize_text(text);
    let output = encode_normalized(&normalized);
    if output.is_empty() {
        debug!("No encodable characters in {:?}", text);
        return Err(CodecError::Meaningless { direction: Direction::ToMorse });
    }

    Ok(Translation {
        direction: Direction::ToMorse,
        output,
        audio_text: normalized,
    })
}

/// Translate Morse input to text, classifying empty, invalid and meaningless input
pub fn translate_to_text(morse: &str) -> Result<Translation> {
    if morse.is_empty() {
        return Err(CodecError::EmptyInput);
    }

    let output = decode(morse)?;
    if output.is_empty() {
        debug!("No known codewords in {:?}", morse);
        return Err(CodecError::Meaningless { direction: Direction::ToText });
    }

    Ok(Translation {
        direction: Direction::ToText,
        audio_text: output.clone(),
        output,
    })
}
