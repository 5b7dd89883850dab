//! Inspected file attributes

use std::fs::Metadata;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, Timelike};

/// Source of a file's creation time.
///
/// Production code uses [`FileSystemClock`]; tests plug in a fixed hour since
/// birth times cannot be set from userland.
pub trait CreationClock {
    fn creation_time(&self, path: &Path, metadata: &Metadata) -> io::Result<DateTime<Local>>;
}

/// Reads the birth time from file metadata, in the local time zone.
///
/// Falls back to the modification time on filesystems that do not record
/// birth times.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemClock;

impl CreationClock for FileSystemClock {
    fn creation_time(&self, _path: &Path, metadata: &Metadata) -> io::Result<DateTime<Local>> {
        let created = match metadata.created() {
            Ok(time) => time,
            Err(_) => metadata.modified()?,
        };
        Ok(DateTime::<Local>::from(created))
    }
}

/// A directory entry picked up by the sweep or by a creation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchedFile {
    pub path: PathBuf,
    pub extension: Option<String>,
    pub created: DateTime<Local>,
}

impl WatchedFile {
    /// Read the attributes of `path`. Fails when the entry vanished or is
    /// not readable.
    pub fn inspect(path: &Path, clock: &impl CreationClock) -> io::Result<Self> {
        let metadata = std::fs::metadata(path)?;
        let created = clock.creation_time(path, &metadata)?;

        Ok(Self {
            path: path.to_path_buf(),
            extension: extension_of(path),
            created,
        })
    }

    /// Local-time hour of creation, 0-23.
    pub fn creation_hour(&self) -> u32 {
        self.created.hour()
    }
}

/// Everything after the last `.` of the file name, exactly as written.
///
/// `notes` has no extension, `notes.` has an empty one and `.jar` has `jar`.
pub fn extension_of(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    name.rsplit_once('.').map(|(_, ext)| ext.to_string())
}
