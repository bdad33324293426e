//! Builder for creating and configuring TimetableManager instances.

use std::path::{Path, PathBuf};

use super::TimetableManager;
use crate::{
    error::{FileResultExt, Result, TimetableError},
    store::JsonStore,
};

/// Builder for creating and configuring TimetableManager instances.
#[derive(Debug, Clone)]
pub struct TimetableBuilder {
    data_path: Option<PathBuf>,
}

impl TimetableBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { data_path: None }
    }

    /// Sets a custom snapshot file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/rota/timetable.json` or
    /// `~/.local/share/rota/timetable.json`
    pub fn with_data_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.data_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured manager instance, loading the persisted
    /// entries.
    ///
    /// # Errors
    ///
    /// Returns `TimetableError::FileSystem` if the data path is unusable
    /// and `TimetableError::XdgDirectory` if no default path can be
    /// resolved.
    pub fn build(self) -> Result<TimetableManager> {
        let data_path = if let Some(path) = self.data_path {
            path
        } else {
            Self::default_data_path()?
        };

        if let Some(parent) = data_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).fs_context(parent)?;
            }
        }

        TimetableManager::new(JsonStore::new(data_path))
    }

    /// Returns the default snapshot path following XDG Base Directory
    /// specification.
    fn default_data_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("rota")
            .place_data_file("timetable.json")
            .map_err(|e| TimetableError::XdgDirectory(e.to_string()))
    }
}

impl Default for TimetableBuilder {
    fn default() -> Self {
        Self::new()
    }
}
