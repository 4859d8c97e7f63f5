//! Morse code translator tools library

pub mod audio;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod messages;
pub mod output;
pub mod prompt;
pub mod session;
pub mod shell;

pub use audio::{AudioPlayer, AudioRenderer, CommandPlayer, WavRenderer};
pub use clipboard::{Clipboard, CommandClipboard};
pub use config::AppConfig;
pub use error::{Result, ToolError};
pub use prompt::{AutoConfirm, Confirm, LineConfirm};
pub use session::{AudioOutcome, AudioSlot, CopyOutcome, PlayOutcome, Session, TranslateReport};
pub use shell::Shell;
