//! Input normalization and sanitation
//!
//! Plain text is folded to ASCII and uppercased before it is looked up in the
//! symbol table. Morse input is validated against the symbol alphabet and its
//! whitespace runs are collapsed.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters the tone renderer refuses, shown to the user verbatim
pub const AUDIO_UNSUPPORTED_CHARS: &str = "~`<>\\|*^%@#";

static AUDIO_UNSUPPORTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[~`<>\\|*^%@#]+").expect("valid audio blacklist pattern"));

static MORSE_ALPHABET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[.\-/ ]+$").expect("valid Morse alphabet pattern"));

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("valid whitespace pattern"));

/// Fold diacritics to ASCII, uppercase and trim
///
/// Letters, digits and whitespace are transliterated. Other non-ASCII
/// characters survive only as ASCII punctuation (`–` becomes `-`); symbols
/// that would transliterate to a name, such as emoji or `€`, are dropped.
pub fn normalize_text(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for ch in text.chars() {
        fold_char(ch, &mut folded);
    }
    folded.to_ascii_uppercase().trim().to_string()
}

fn fold_char(ch: char, out: &mut String) {
    if ch.is_ascii() {
        out.push(ch);
        return;
    }
    let Some(ascii) = deunicode::deunicode_char(ch) else {
        return;
    };
    if ch.is_alphanumeric() || ch.is_whitespace() || !ascii.bytes().any(|b| b.is_ascii_alphabetic()) {
        out.push_str(ascii);
    }
}

/// True when `text` contains characters the tone renderer cannot key
pub fn has_audio_unsupported(text: &str) -> bool {
    AUDIO_UNSUPPORTED.is_match(text)
}

/// Remove every character the tone renderer cannot key
pub fn strip_audio_unsupported(text: &str) -> String {
    AUDIO_UNSUPPORTED.replace_all(text, "").into_owned()
}

/// Position and value of the first character outside `.`, `-`, `/` and space
pub fn first_invalid_morse_char(morse: &str) -> Option<(usize, char)> {
    if MORSE_ALPHABET.is_match(morse) {
        return None;
    }
    morse
        .chars()
        .enumerate()
        .find(|(_, c)| !matches!(c, '.' | '-' | '/' | ' '))
}

/// Collapse every run of two or more whitespace characters into one space
pub fn collapse_whitespace(morse: &str) -> String {
    WHITESPACE_RUN.replace_all(morse, " ").into_owned()
}
