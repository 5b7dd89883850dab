//! Routing and moving of a single path

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::Directories;
use crate::error::{SegregatorError, SegregatorResult};

use super::file::{CreationClock, FileSystemClock, WatchedFile};
use super::rule::{classify, Destination};

/// What happened to one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Renamed into a destination directory
    Moved {
        from: PathBuf,
        to: PathBuf,
        destination: Destination,
    },
    /// No rule matched; the entry stays where it is
    Unmatched { path: PathBuf },
}

/// Classifies paths and moves them into the dev or test directory.
#[derive(Debug, Clone)]
pub struct Router<C = FileSystemClock> {
    dirs: Directories,
    clock: C,
}

impl Router {
    pub fn new(dirs: Directories) -> Self {
        Self::with_clock(dirs, FileSystemClock)
    }
}

impl<C: CreationClock> Router<C> {
    pub fn with_clock(dirs: Directories, clock: C) -> Self {
        Self { dirs, clock }
    }

    pub fn directories(&self) -> &Directories {
        &self.dirs
    }

    pub fn destination_dir(&self, destination: Destination) -> &Path {
        match destination {
            Destination::Dev => self.dirs.dev(),
            Destination::Test => self.dirs.test(),
        }
    }

    /// Decide where `path` belongs without touching it.
    ///
    /// Attributes are read first, so a vanished path fails whatever its
    /// extension.
    pub fn route(&self, path: &Path) -> SegregatorResult<Option<Destination>> {
        let file = WatchedFile::inspect(path, &self.clock).map_err(|source| {
            SegregatorError::Inspect {
                path: path.to_path_buf(),
                source,
            }
        })?;

        Ok(classify(file.extension.as_deref(), file.creation_hour()))
    }

    /// Route `path` and rename it into its destination, keeping the name.
    ///
    /// Never overwrites: an existing destination entry leaves the source in
    /// place. There is no copy fallback, so a cross-volume move fails.
    pub fn process(&self, path: &Path) -> SegregatorResult<Outcome> {
        let Some(destination) = self.route(path)? else {
            debug!(path = %path.display(), "No routing rule matched, leaving file in place");
            return Ok(Outcome::Unmatched {
                path: path.to_path_buf(),
            });
        };

        let name = path.file_name().ok_or_else(|| SegregatorError::NoFileName {
            path: path.to_path_buf(),
        })?;
        let target = self.destination_dir(destination).join(name);

        if fs::symlink_metadata(&target).is_ok() {
            return Err(SegregatorError::DestinationExists { path: target });
        }

        fs::rename(path, &target).map_err(|source| SegregatorError::Move {
            from: path.to_path_buf(),
            to: target.clone(),
            source,
        })?;

        info!(destination = %destination, "File has been moved to {}", target.display());

        Ok(Outcome::Moved {
            from: path.to_path_buf(),
            to: target,
            destination,
        })
    }
}
