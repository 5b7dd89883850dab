//! Segregator - routes files dropped into a watched directory
//!
//! New `jar` files go to the dev directory when they were created during an
//! even local hour and to the test directory otherwise; `xml` files always go
//! to dev. Everything else stays where it is.

pub mod config;
pub mod error;
pub mod fs;
pub mod router;
pub mod watcher;

#[cfg(test)]
mod test_support;

// Re-exports for convenience
pub use config::{Config, ConfigWarning, Directories};
pub use error::{SegregatorError, SegregatorResult};
pub use router::{
    classify, extension_of, CreationClock, Destination, FileSystemClock, Outcome, Router,
    WatchedFile,
};
pub use watcher::{EventQueue, Segregator, ShutdownHandle, StopReason, SweepSummary, WatchEvent};
