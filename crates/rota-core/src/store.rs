//! JSON snapshot persistence for the timetable.
//!
//! This module provides the persistence gateway consumed by the manager: a
//! full-snapshot read/write of the entry collection against a single JSON
//! file. The on-disk document has one top-level key:
//!
//! ```json
//! { "entries": [ { "id": "...", "subject": "...", ... } ] }
//! ```
//!
//! Loading is self-healing: an absent file yields an empty collection, and
//! a file that exists but no longer parses (malformed JSON, missing
//! fields) is logged, replaced with an empty structure, and treated as an
//! empty collection rather than a hard failure. Saving writes the full
//! snapshot to a temporary sibling file and renames it into place, so a
//! crash mid-write cannot leave a truncated document behind.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    error::{FileResultExt, Result},
    models::Entry,
};

/// On-disk snapshot shape with its single top-level key.
#[derive(Debug, Default, Serialize, Deserialize)]
struct TimetableSnapshot {
    entries: Vec<Entry>,
}

/// File-backed persistence gateway for the entry collection.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Creates a store backed by the given snapshot file path. The file is
    /// not touched until the first load or save.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full entry collection from the snapshot file.
    ///
    /// Returns an empty collection if the file does not exist. Malformed
    /// content is replaced on disk with an empty structure and reported as
    /// an empty collection.
    ///
    /// # Errors
    ///
    /// Returns `TimetableError::FileSystem` only for real I/O failures
    /// (e.g. missing read permission), never for bad content.
    pub fn load_entries(&self) -> Result<Vec<Entry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&self.path).fs_context(&self.path)?;
        match serde_json::from_str::<TimetableSnapshot>(&raw) {
            Ok(snapshot) => Ok(snapshot.entries),
            Err(err) => {
                warn!(
                    "snapshot file {} is unreadable ({err}); resetting to an empty timetable",
                    self.path.display()
                );
                self.save_entries(&[])?;
                Ok(Vec::new())
            }
        }
    }

    /// Overwrites the snapshot file with the full given entry sequence.
    ///
    /// The document is written to a temporary sibling file first and then
    /// renamed over the target, keeping the previous snapshot intact if the
    /// process dies mid-write.
    ///
    /// # Errors
    ///
    /// Returns `TimetableError::FileSystem` if the directory cannot be
    /// created or the file cannot be written, and
    /// `TimetableError::Serialization` if encoding fails.
    pub fn save_entries(&self, entries: &[Entry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).fs_context(parent)?;
            }
        }

        let snapshot = TimetableSnapshot {
            entries: entries.to_vec(),
        };
        let json = serde_json::to_string_pretty(&snapshot)?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json).fs_context(&tmp_path)?;
        fs::rename(&tmp_path, &self.path).fs_context(&self.path)?;
        Ok(())
    }
}
