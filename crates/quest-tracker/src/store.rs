// store.rs — SaveFile: the file-backed persistence backend.
//
// The tracker touches the backend at most twice per session: one read at
// startup, one write at shutdown. Each is a single scoped operation; the
// file is never held open across menu interactions.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::TrackerError;

/// A save file on disk.
pub struct SaveFile {
    path: PathBuf,
}

impl SaveFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole save document. A missing file is not an error; it
    /// means no session has been saved yet.
    pub fn read(&self) -> Result<Option<String>, TrackerError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path).map_err(|source| TrackerError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        Ok(Some(text))
    }

    /// Write the whole save document, creating parent directories as needed.
    pub fn write(&self, text: &str) -> Result<(), TrackerError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| TrackerError::Io {
                    path: parent.display().to_string(),
                    source,
                })?;
            }
        }
        fs::write(&self.path, text).map_err(|source| TrackerError::Io {
            path: self.path.display().to_string(),
            source,
        })
    }
}
