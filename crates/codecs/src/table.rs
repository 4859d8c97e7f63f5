//! International Morse code symbol table
//!
//! The forward and inverse lookups are built once on first use and never
//! mutated afterwards.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Every supported character with its code, in display order
pub const MORSE_TABLE: &[(char, &str)] = &[
    // Letters
    ('A', ".-"), ('B', "-..."), ('C', "-.-."), ('D', "-.."), ('E', "."),
    ('F', "..-."), ('G', "--."), ('H', "...."), ('I', ".."), ('J', ".---"),
    ('K', "-.-"), ('L', ".-.."), ('M', "--"), ('N', "-."), ('O', "---"),
    ('P', ".--."), ('Q', "--.-"), ('R', ".-."), ('S', "..."), ('T', "-"),
    ('U', "..-"), ('V', "...-"), ('W', ".--"), ('X', "-..-"), ('Y', "-.--"),
    ('Z', "--.."),
    // Numbers
    ('0', "-----"), ('1', ".----"), ('2', "..---"), ('3', "...--"), ('4', "....-"),
    ('5', "....."), ('6', "-...."), ('7', "--..."), ('8', "---.."), ('9', "----."),
    // Punctuation
    ('.', ".-.-.-"), (',', "--..--"), ('\'', ".----."), ('"', ".-..-."),
    ('_', "..--.-"), (':', "---..."), (';', "-.-.-."), ('?', "..--.."),
    ('!', "-.-.--"), ('-', "-....-"), ('+', ".-.-."), ('/', "-..-."),
    ('(', "-.--."), (')', "-.--.-"), ('=', "-...-"), ('@', ".--.-."),
    ('$', "...-..-"), ('&', ".-..."),
];

static ENCODE_TABLE: Lazy<HashMap<char, &'static str>> =
    Lazy::new(|| MORSE_TABLE.iter().copied().collect());

static DECODE_TABLE: Lazy<HashMap<&'static str, char>> =
    Lazy::new(|| MORSE_TABLE.iter().map(|&(ch, code)| (code, ch)).collect());

/// Morse code for a normalized (uppercase ASCII) character
pub fn code_for(ch: char) -> Option<&'static str> {
    ENCODE_TABLE.get(&ch).copied()
}

/// Character for a single Morse codeword
pub fn char_for(code: &str) -> Option<char> {
    DECODE_TABLE.get(code).copied()
}

/// True when `ch` has a code of its own
pub fn is_supported(ch: char) -> bool {
    ENCODE_TABLE.contains_key(&ch)
}
