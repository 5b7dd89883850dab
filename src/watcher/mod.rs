//! Directory watcher
//!
//! Implements the long-running loop with:
//! - Directory bootstrapping (home, dev, test)
//! - Initial sweep of entries that arrived while nothing was watching
//! - Non-recursive creation events via `notify`, handled one at a time
//! - Graceful shutdown through [`ShutdownHandle`]
//! - NDJSON event output for scripting

mod event;
mod queue;
mod segregator;

pub use event::{StopReason, SweepSummary, WatchEvent, WatchPhase};
pub use queue::{EventQueue, ShutdownHandle};
pub use segregator::Segregator;
