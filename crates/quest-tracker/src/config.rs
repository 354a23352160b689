// config.rs — Tracker configuration.
//
// TrackerConfig decides where a session keeps its files: the save file
// the codec reads and writes, and the append-only events log. for_dir()
// produces the defaults; load_or_default() honors an optional quest.toml
// in the session directory, resolving relative paths against it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// Name of the optional config file, looked up in the session directory.
const CONFIG_FILE: &str = "quest.toml";

/// File layout for a tracker session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Save file holding the score and goal list.
    pub save_file: PathBuf,

    /// Append-only JSONL log of lifecycle events.
    pub events_log: PathBuf,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            save_file: PathBuf::from("goals.txt"),
            events_log: PathBuf::from(".quest/events.jsonl"),
        }
    }
}

impl TrackerConfig {
    /// Default layout rooted in a session directory.
    pub fn for_dir(dir: impl AsRef<Path>) -> Self {
        Self::default().resolved_against(dir.as_ref())
    }

    /// Load `quest.toml` from the directory when present, defaults
    /// otherwise. Relative paths in the file are resolved against the
    /// directory.
    pub fn load_or_default(dir: impl AsRef<Path>) -> Result<Self, TrackerError> {
        let dir = dir.as_ref();
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::for_dir(dir));
        }

        let text = fs::read_to_string(&path).map_err(|source| TrackerError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: TrackerConfig = toml::from_str(&text).map_err(|e| TrackerError::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(config.resolved_against(dir))
    }

    fn resolved_against(mut self, dir: &Path) -> Self {
        if self.save_file.is_relative() {
            self.save_file = dir.join(&self.save_file);
        }
        if self.events_log.is_relative() {
            self.events_log = dir.join(&self.events_log);
        }
        self
    }
}
