//! Directory bootstrapping

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Directories;
use crate::error::{SegregatorError, SegregatorResult};

/// Create `path` (and parents) unless it is already a directory.
///
/// Returns whether anything was created.
pub fn ensure_directory(path: &Path) -> SegregatorResult<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(path).map_err(|source| SegregatorError::CreateDirectory {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(true)
}

/// Make sure home, dev and test exist. Returns the ones that were created.
pub fn ensure_directories(dirs: &Directories) -> SegregatorResult<Vec<PathBuf>> {
    let mut created = Vec::new();
    for dir in dirs.all() {
        if ensure_directory(dir)? {
            created.push(dir.to_path_buf());
        }
    }
    Ok(created)
}
