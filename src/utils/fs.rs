use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{PatchError, Result};

/// Read a file's contents as UTF-8 text.
///
/// Fails with [`PatchError::Io`] when the file cannot be read and with
/// [`PatchError::Decode`] when the bytes are not valid UTF-8.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    debug!("Reading file: {}", path.display());

    let bytes = fs::read(path).map_err(|e| PatchError::io_error(e, path))?;
    String::from_utf8(bytes).map_err(|e| PatchError::decode_error(e, path))
}

/// Overwrite an existing file with `content`.
///
/// Parent directories are never created: the target is expected to have
/// been read just before.
pub fn write_text(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing {} bytes to file: {}", content.len(), path.display());

    fs::write(path, content).map_err(|e| PatchError::io_error(e, path))
}

/// Check if a file exists
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    path.exists() && path.is_file()
}
