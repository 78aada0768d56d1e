//! Atomic output writing.
//!
//! The page is written to a temporary file next to the destination and then
//! renamed over it. A failed write leaves the destination untouched and the
//! temporary file is removed when it goes out of scope.

use std::{io::Write, path::Path};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::{Error, Result};

/// Write `contents` to `path`, replacing any existing file.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// Returns `Error::WriteFailure` if the destination directory is missing or
/// not writable, or if the final rename fails.
pub fn write_document(path: &Path, contents: &str) -> Result<u64> {
    if path.is_dir() {
        return Err(Error::write_failure(path, "destination is a directory"));
    }

    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut staged =
        NamedTempFile::new_in(parent).map_err(|e| Error::write_failure(path, e))?;
    staged
        .write_all(contents.as_bytes())
        .and_then(|()| staged.as_file().sync_all())
        .map_err(|e| Error::write_failure(path, e))?;
    staged
        .persist(path)
        .map_err(|e| Error::write_failure(path, e.error))?;

    let written = contents.len() as u64;
    debug!(path = %path.display(), bytes = written, "document written");
    Ok(written)
}
