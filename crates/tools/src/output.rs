//! Output file naming

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// First path under `dir` that does not exist yet
///
/// Creates `dir` when missing. `file_name` is tried as-is, then with `_1`,
/// `_2`, ... inserted before the extension. The check and the later write
/// are separate steps, so this assumes a single writer.
pub fn next_free_path(dir: &Path, file_name: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return Ok(candidate);
    }

    let name = Path::new(file_name);
    let stem = name.file_stem().map(OsString::from).unwrap_or_default();
    let extension = name.extension();

    let mut counter: u64 = 1;
    loop {
        let mut suffixed = stem.clone();
        suffixed.push(format!("_{}", counter));
        if let Some(ext) = extension {
            suffixed.push(".");
            suffixed.push(ext);
        }

        let candidate = dir.join(suffixed);
        if !candidate.exists() {
            debug!("Base name taken, using {:?}", candidate);
            return Ok(candidate);
        }
        counter += 1;
    }
}
