// SPDX-License-Identifier: MPL-2.0
//! Session state persisted in CBOR format.
//!
//! This is state the application manages on its own (last display mode,
//! recently opened URLs, last channel), kept apart from the user-editable
//! `settings.toml`.

use super::paths;
use crate::error::Result;
use crate::shell::DisplayMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Application state that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Display mode the last session ended in, as its persisted code.
    #[serde(default)]
    pub display_mode: u8,

    /// Recently opened URLs, most recent first.
    #[serde(default)]
    pub recent_urls: Vec<String>,

    /// Television channel played last, for "play last channel".
    #[serde(default)]
    pub last_channel: Option<String>,

    /// Last directory used by the open dialog.
    #[serde(default)]
    pub last_open_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads application state from the default location.
    ///
    /// Returns a tuple of (state, optional_warning). If loading fails, returns
    /// default state with a warning explaining what went wrong.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads application state from a custom directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match Self::read(&path) {
            Ok(state) => (state, None),
            Err(err) => (
                Self::default(),
                Some(format!("failed to read {}: {err}", path.display())),
            ),
        }
    }

    /// Saves application state to a custom directory, creating it if needed.
    /// `None` uses the default location.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Result<()> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            log::warn!("no data directory available, session state not saved");
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let writer = BufWriter::new(fs::File::create(&path)?);
        ciborium::into_writer(self, writer)?;
        Ok(())
    }

    fn read(path: &Path) -> Result<Self> {
        let reader = BufReader::new(fs::File::open(path)?);
        Ok(ciborium::from_reader(reader)?)
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }

    /// Display mode the last session ended in.
    #[must_use]
    pub fn last_display_mode(&self) -> DisplayMode {
        DisplayMode::from_persisted_code(self.display_mode)
    }

    pub fn remember_display_mode(&mut self, mode: DisplayMode) {
        self.display_mode = mode.persisted_code();
    }

    /// Sets the last open directory from a file path.
    pub fn set_last_open_directory_from_file(&mut self, file_path: &Path) {
        if let Some(parent) = file_path.parent() {
            self.last_open_directory = Some(parent.to_path_buf());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_state_restores_normal_mode() {
        let state = AppState::default();
        assert_eq!(state.last_display_mode(), DisplayMode::Normal);
        assert!(state.recent_urls.is_empty());
    }

    #[test]
    fn remember_display_mode_stores_persisted_code() {
        let mut state = AppState::default();
        state.remember_display_mode(DisplayMode::FullScreenReturnToMinimal);
        assert_eq!(state.display_mode, 2);
        assert_eq!(state.last_display_mode(), DisplayMode::FullScreen);
    }

    #[test]
    fn set_last_open_directory_ignores_root() {
        let mut state = AppState::default();
        state.set_last_open_directory_from_file(Path::new("/"));
        assert!(state.last_open_directory.is_none());
    }

    #[test]
    fn save_to_and_load_from_custom_directory() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().join("nested");

        let mut original = AppState::default();
        original.remember_display_mode(DisplayMode::Minimal);
        original.recent_urls = vec!["https://example.org/stream.m3u8".to_string()];
        original.last_channel = Some("Arte".to_string());
        original.set_last_open_directory_from_file(Path::new("/home/user/videos/clip.mkv"));

        original
            .save_to(Some(base_dir.clone()))
            .expect("save should succeed");
        assert!(base_dir.join(STATE_FILE).exists());

        let (loaded, warning) = AppState::load_from(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded, original);
    }

    #[test]
    fn load_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("create temp dir");
        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn load_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join(STATE_FILE), "not valid cbor data").expect("write file");

        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_some());
        assert_eq!(state, AppState::default());
    }
}
