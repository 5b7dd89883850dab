//! Configuration type definitions

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::SegregatorResult;

use super::loader::{self, ConfigWarning};

/// Raw settings as read from file, environment and CLI.
///
/// Every field is optional so layers can be merged; [`Config::directories`]
/// fills the gaps with defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Base directory for the defaults below
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Watched (source) directory
    #[serde(default)]
    pub home: Option<PathBuf>,

    /// Destination for even-hour jars and all xml files
    #[serde(default)]
    pub dev: Option<PathBuf>,

    /// Destination for odd-hour jars
    #[serde(default)]
    pub test: Option<PathBuf>,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> SegregatorResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load an explicit file, or the default file when present, or defaults.
    pub fn load_or_default(path: Option<&Path>) -> SegregatorResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(path)
    }

    /// Apply environment variable overrides (SEGREGATOR_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var_os(key))
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn with_env_lookup<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        loader::with_env_overrides(self, lookup)
    }

    /// Overlay every setting present in `other` on top of `self`.
    pub fn merge(self, other: Config) -> Self {
        Self {
            root: other.root.or(self.root),
            home: other.home.or(self.home),
            dev: other.dev.or(self.dev),
            test: other.test.or(self.test),
        }
    }

    /// Resolve into the immutable directory layout used at runtime.
    pub fn directories(&self) -> Directories {
        let root = self.root.clone().unwrap_or_else(|| PathBuf::from("."));
        Directories {
            home: self.home.clone().unwrap_or_else(|| root.join("HOME")),
            dev: self.dev.clone().unwrap_or_else(|| root.join("DEV")),
            test: self.test.clone().unwrap_or_else(|| root.join("TEST")),
        }
    }
}

/// The three well-known directories, fixed for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directories {
    home: PathBuf,
    dev: PathBuf,
    test: PathBuf,
}

impl Directories {
    pub fn new(home: impl Into<PathBuf>, dev: impl Into<PathBuf>, test: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            dev: dev.into(),
            test: test.into(),
        }
    }

    /// The watched directory.
    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn dev(&self) -> &Path {
        &self.dev
    }

    pub fn test(&self) -> &Path {
        &self.test
    }

    /// Home, dev and test, in the order they are ensured at startup.
    pub fn all(&self) -> [&Path; 3] {
        [&self.home, &self.dev, &self.test]
    }
}
