//! System clipboard access

use crate::error::{Result, ToolError};
use std::io::Write;
use std::process::{Command, Stdio};

pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// Pipes text into the platform clipboard utility
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl Default for CommandClipboard {
    fn default() -> Self {
        if cfg!(target_os = "macos") {
            Self::new("pbcopy", &[])
        } else if cfg!(target_os = "windows") {
            Self::new("clip", &[])
        } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            Self::new("wl-copy", &[])
        } else {
            Self::new("xclip", &["-selection", "clipboard"])
        }
    }
}

impl CommandClipboard {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl Clipboard for CommandClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        let unavailable = |e: std::io::Error| ToolError::Clipboard {
            msg: format!("{}: {}", self.program, e),
        };

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .map_err(unavailable)?;

        // Dropping stdin closes the pipe; the child is reaped even when the write fails
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        let status = child.wait().map_err(unavailable)?;
        written.map_err(unavailable)?;
        if !status.success() {
            return Err(ToolError::Clipboard {
                msg: format!("{} exited with {}", self.program, status),
            });
        }
        Ok(())
    }
}
