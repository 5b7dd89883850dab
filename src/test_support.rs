//! Shared helpers for unit tests

use std::fs::Metadata;
use std::io;
use std::path::Path;

use chrono::{DateTime, Local, TimeZone};
use tempfile::TempDir;

use crate::config::Directories;
use crate::router::CreationClock;

/// Reports every file as created at `HH:30` local time on a fixed date.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedHourClock(pub u32);

impl CreationClock for FixedHourClock {
    fn creation_time(&self, _path: &Path, _metadata: &Metadata) -> io::Result<DateTime<Local>> {
        Local
            .with_ymd_and_hms(2024, 1, 15, self.0, 30, 0)
            .earliest()
            .ok_or_else(|| io::Error::other("hour does not exist in local time zone"))
    }
}

/// A temp root with HOME, DEV and TEST already created.
pub(crate) fn layout() -> (TempDir, Directories) {
    let temp = tempfile::tempdir().unwrap();
    let dirs = Directories::new(
        temp.path().join("HOME"),
        temp.path().join("DEV"),
        temp.path().join("TEST"),
    );
    for dir in dirs.all() {
        std::fs::create_dir_all(dir).unwrap();
    }
    (temp, dirs)
}
