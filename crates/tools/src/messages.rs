//! User-facing wording

pub const NOTHING_TO_TRANSLATE: &str = "There is nothing to translate (yet).";
pub const ONLY_MORSE_SYMBOLS: &str = "You may only use the characters: .-/ and spaces in your Morse code input.";
pub const MEANINGLESS_TO_MORSE: &str = "The input contains characters that cannot be translated into Morse code. \
     Please, use only letters, numbers, and punctuation marks.";
pub const MEANINGLESS_TO_TEXT: &str = "The input contains a sequence of valid symbols that do not correspond to \
     any Morse code symbol. Please, use only dots, dashes, forward slashes, and spaces.";
pub const CONFIRM_AUDIO_CLEANUP: &str = "Your input contains characters that are unsupported for audio generation \
     (~`<>\\|*^%@#). Would you like to proceed and have them removed automatically?";
pub const NO_WRITE_PERMISSION: &str =
    "The application doesn't have permission to save files to the current location.";
pub const NOTHING_TO_PLAY: &str = "There is nothing to play (yet).";
pub const AUDIO_FILE_MISSING: &str = "The file that has just been created doesn't seem to exist anymore.";
pub const NOTHING_TO_COPY: &str = "There is nothing to copy (yet).";
pub const COPY_SUCCESS: &str = "The text has been successfully copied to your clipboard.";
pub const AUDIO_READY: &str = "READY:";
