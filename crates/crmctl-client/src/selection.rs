//! Persisted user selection.
//!
//! The CLI can "select" a user so later commands may omit `--user-id`. The
//! selection lives in a fixed-name JSON file in the working directory, and the
//! file's presence is itself the mode switch: no file means no selection,
//! which is the default state and never an error.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// File name of the persisted selection, relative to the working directory.
pub const SELECTION_FILE: &str = ".crm-context.json";

/// The currently selected user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Id of the selected user.
    pub user_id: String,
    /// Username, kept for display.
    pub username: String,
}

/// Store for the zero-or-one persisted [`Selection`].
///
/// Reads and writes are unlocked; concurrent CLI invocations race. Acceptable
/// for a local single-operator tool.
#[derive(Debug, Clone)]
pub struct SelectionStore {
    path: PathBuf,
}

impl SelectionStore {
    /// Store at [`SELECTION_FILE`] in the working directory.
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(SELECTION_FILE),
        }
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a selection is currently persisted.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Persist `selection`, replacing any previous one wholesale.
    pub fn save(&self, selection: &Selection) -> Result<()> {
        let data = serde_json::to_string_pretty(selection)
            .map_err(|e| self.error(format!("failed to serialize: {e}")))?;
        fs::write(&self.path, data).map_err(|e| self.error(format!("failed to write: {e}")))
    }

    /// Load the persisted selection, or `None` when no file exists.
    pub fn load(&self) -> Result<Option<Selection>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.error(format!("failed to read: {e}"))),
        };
        let selection = serde_json::from_str(&data)
            .map_err(|e| self.error(format!("failed to parse: {e}")))?;
        Ok(Some(selection))
    }

    /// Remove the persisted selection. A no-op when none exists.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.error(format!("failed to remove: {e}"))),
        }
    }

    fn error(&self, message: String) -> Error {
        Error::Selection {
            path: self.path.display().to_string(),
            message,
        }
    }
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> SelectionStore {
        SelectionStore::at(dir.path().join(SELECTION_FILE))
    }

    fn joe() -> Selection {
        Selection {
            user_id: "42".to_string(),
            username: "joe".to_string(),
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&joe()).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, Some(joe()));
    }

    #[test]
    fn load_without_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(!store.exists());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn save_overwrites_previous_selection() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&joe()).unwrap();
        let other = Selection {
            user_id: "7".to_string(),
            username: "ann".to_string(),
        };
        store.save(&other).unwrap();

        assert_eq!(store.load().unwrap(), Some(other));
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        // No file yet: clearing must not error.
        store.clear().unwrap();

        store.save(&joe()).unwrap();
        assert!(store.exists());

        store.clear().unwrap();
        assert!(!store.exists());
        store.clear().unwrap();
    }

    #[test]
    fn corrupt_file_is_a_selection_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        std::fs::write(store.path(), "not json").unwrap();
        let err = store.load().unwrap_err();
        assert!(matches!(err, Error::Selection { .. }));
    }

    #[test]
    fn exists_tracks_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(!store.exists());
        store.save(&joe()).unwrap();
        assert!(store.exists());
    }
}
