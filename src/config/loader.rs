//! Configuration loading

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SegregatorError, SegregatorResult};

use super::types::Config;

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "segregator.toml";

const KNOWN_KEYS: &[&str] = &["root", "home", "dev", "test"];

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SegregatorResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SegregatorError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// An explicit path must load; the default file is only read when present.
pub fn load_or_default(path: Option<&Path>) -> SegregatorResult<(Config, Vec<ConfigWarning>)> {
    match path {
        Some(explicit) => load_with_warnings(explicit),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                load_with_warnings(default_path)
            } else {
                Ok((Config::default(), Vec::new()))
            }
        }
    }
}

/// Apply SEGREGATOR_ROOT, SEGREGATOR_HOME, SEGREGATOR_DEV and SEGREGATOR_TEST.
///
/// Empty values are ignored.
pub fn with_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<OsString>,
{
    let var = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);

    if let Some(root) = var("SEGREGATOR_ROOT") {
        config.root = Some(root);
    }
    if let Some(home) = var("SEGREGATOR_HOME") {
        config.home = Some(home);
    }
    if let Some(dev) = var("SEGREGATOR_DEV") {
        config.dev = Some(dev);
    }
    if let Some(test) = var("SEGREGATOR_TEST") {
        config.test = Some(test);
    }

    config
}

/// Line of `key = ...`, matching the whole key rather than a substring.
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            line.trim_start()
                .strip_prefix(key)
                .is_some_and(|rest| rest.starts_with(|c: char| c == '=' || c.is_whitespace()))
        })
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
