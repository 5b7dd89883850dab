//! Configuration module for Segregator
//!
//! Settings are resolved once at startup, in priority order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SEGREGATOR_*)
//! 3. Config file (segregator.toml)
//! 4. Built-in defaults (lowest priority)
//!
//! The result is an immutable [`Directories`] value handed to the router and
//! the watch loop.

mod loader;
mod types;

pub use loader::{ConfigWarning, DEFAULT_CONFIG_FILE};
pub use types::{Config, Directories};
