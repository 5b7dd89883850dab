//! File classification and routing
//!
//! - [`classify`] - pure decision from extension and creation hour
//! - [`WatchedFile`] - a path with its extension and local creation time
//! - [`Router`] - inspects, classifies and moves a single path
//!
//! Routing rules:
//!
//! | extension | creation hour | destination |
//! |-----------|---------------|-------------|
//! | `jar`     | even          | dev         |
//! | `jar`     | odd           | test        |
//! | `xml`     | any           | dev         |
//! | other     | any           | unmatched   |
//!
//! The creation-time heuristic is known to misfire for producers that write
//! temporary files first (spreadsheet lock files, for instance); nothing here
//! compensates for that.

mod file;
mod mover;
mod rule;


pub use file::{extension_of, CreationClock, FileSystemClock, WatchedFile};
pub use mover::{Outcome, Router};
pub use rule::{classify, Destination, RoutingRule, ROUTING_RULES};
