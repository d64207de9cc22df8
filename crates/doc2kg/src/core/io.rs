//! File I/O utilities.

use crate::{Doc2kgError, Result};
use std::io;
use std::path::Path;

/// Validate that `path` names an existing regular file.
///
/// # Errors
///
/// Returns `Doc2kgError::Io` (with the path in the message) if the file is missing,
/// unreadable, or a directory.
pub fn validate_file_exists(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let metadata =
        std::fs::metadata(path).map_err(|e| io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))?;

    if !metadata.is_file() {
        return Err(Doc2kgError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{}: not a regular file", path.display()),
        )));
    }

    Ok(())
}

/// Create `dir` and any missing parents.
pub fn ensure_dir(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    if !dir.exists() {
        tracing::debug!("Creating output directory {}", dir.display());
    }
    std::fs::create_dir_all(dir).map_err(|e| io::Error::new(e.kind(), format!("{}: {}", dir.display(), e)))?;
    Ok(())
}

/// Resolve an argument that is either inline text or a path to a file holding it.
///
/// If `argument` names an existing file its contents are returned; otherwise the
/// argument itself is.
pub fn read_inline_or_file(argument: &str) -> Result<String> {
    let path = Path::new(argument);
    if path.is_file() {
        tracing::debug!("Reading argument from file {}", path.display());
        return std::fs::read_to_string(path)
            .map_err(|e| Doc2kgError::Io(io::Error::new(e.kind(), format!("{}: {}", path.display(), e))));
    }

    Ok(argument.to_string())
}
