//! Directory creation and file moves.

use std::io;
use std::path::Path;

use crate::error::{Error, Result};

/// Ensure a directory exists, creating it (and its parents) if necessary.
///
/// An already existing directory is not an error.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        std::fs::create_dir_all(path)
            .map_err(|e| Error::file_io("Failed to create directory", path, e))?;
    }
    Ok(())
}

/// Move a file, copying and deleting when the rename crosses filesystems.
pub fn move_file(from: &Path, to: &Path) -> Result<()> {
    match std::fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            tracing::debug!(
                "Rename across devices, copying {} to {}",
                from.display(),
                to.display()
            );
            std::fs::copy(from, to).map_err(|e| Error::file_io("Failed to copy", from, e))?;
            std::fs::remove_file(from).map_err(|e| Error::file_io("Failed to remove", from, e))
        }
        Err(e) => Err(Error::file_io("Failed to move", from, e)),
    }
}

/// Rename a file without replacing an existing target.
///
/// The existence check and the rename are separate steps, so a target created
/// in between by another process can still be replaced.
pub fn rename_no_clobber(from: &Path, to: &Path) -> Result<()> {
    if to.exists() {
        return Err(Error::RenameCollision {
            path: to.to_path_buf(),
        });
    }
    std::fs::rename(from, to).map_err(|e| Error::file_io("Failed to rename", from, e))
}
