//! Watch event types and summaries

use serde::Serialize;

use crate::error::{SegregatorError, SegregatorResult};
use crate::router::{Destination, Outcome};

/// Lifecycle of [`Segregator::run`](super::Segregator::run).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchPhase {
    Initializing,
    Sweeping,
    Watching,
    Stopped,
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Shutdown was requested (Ctrl+C or a [`ShutdownHandle`](super::ShutdownHandle))
    Requested,
    /// The watched directory went away, so the registration is no longer valid
    SourceRemoved,
    /// The event channel closed
    Disconnected,
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    WatchStarted {
        source: String,
        dev: String,
        test: String,
    },
    DirectoryCreated {
        path: String,
    },
    SweepComplete {
        moved: usize,
        unmatched: usize,
        failed: usize,
    },
    Watching {
        source: String,
    },
    FileDetected {
        path: String,
    },
    FileMoved {
        from: String,
        to: String,
        destination: Destination,
    },
    FileUnmatched {
        path: String,
    },
    FileFailed {
        path: String,
        message: String,
    },
    EventError {
        message: String,
    },
    Shutdown {
        reason: StopReason,
    },
}

impl WatchEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Counts from one pass over the watched directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepSummary {
    pub moved: usize,
    pub unmatched: usize,
    pub failed: usize,
}

impl SweepSummary {
    /// Entries that vanished before they could be inspected are not counted.
    pub fn record(&mut self, result: &SegregatorResult<Outcome>) {
        match result {
            Ok(Outcome::Moved { .. }) => self.moved += 1,
            Ok(Outcome::Unmatched { .. }) => self.unmatched += 1,
            Err(err) if is_vanished(err) => {}
            Err(_) => self.failed += 1,
        }
    }
}

/// The entry was gone by the time its attributes were read.
pub(crate) fn is_vanished(err: &SegregatorError) -> bool {
    matches!(
        err,
        SegregatorError::Inspect { source, .. } if source.kind() == std::io::ErrorKind::NotFound
    )
}

impl From<SweepSummary> for WatchEvent {
    fn from(summary: SweepSummary) -> Self {
        WatchEvent::SweepComplete {
            moved: summary.moved,
            unmatched: summary.unmatched,
            failed: summary.failed,
        }
    }
}
