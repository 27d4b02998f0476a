// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode and startup display mode
//! - `[interface]` - Control bar placement
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path, or pass a
//!    directory to the `_with_override()` functions
//! 2. Set `MEDIA_DECK_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use media_deck::config::{self, StartupDisplayMode};
//!
//! let (mut config, _warning) = config::load();
//! config.general.startup_display_mode = StartupDisplayMode::RememberLast;
//! config::save_with_override(&config, None).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::shell::{DisplayMode, ToolBarArea};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Display mode applied once the main window is shown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StartupDisplayMode {
    #[default]
    Normal,
    Minimal,
    FullScreen,
    /// Restore the mode the previous session ended in.
    RememberLast,
}

impl StartupDisplayMode {
    /// Mode to enter at startup given the mode the last session ended in.
    #[must_use]
    pub fn resolve(self, last_session: DisplayMode) -> DisplayMode {
        match self {
            StartupDisplayMode::Normal => DisplayMode::Normal,
            StartupDisplayMode::Minimal => DisplayMode::Minimal,
            StartupDisplayMode::FullScreen => DisplayMode::FullScreen,
            // Round-trip through the persisted code so the "return to
            // minimal" variant never leaks across sessions.
            StartupDisplayMode::RememberLast => {
                DisplayMode::from_persisted_code(last_session.persisted_code())
            }
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,

    /// Display mode entered at startup.
    #[serde(default)]
    pub startup_display_mode: StartupDisplayMode,
}

/// Window chrome settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct InterfaceConfig {
    /// Edge the control bar is docked to.
    #[serde(default)]
    pub control_bar_area: ToolBarArea,
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub interface: InterfaceConfig,
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("failed to load {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to a custom directory, or to the default path
/// when `base_dir` is `None`.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
                startup_display_mode: StartupDisplayMode::RememberLast,
            },
            interface: InterfaceConfig {
                control_bar_area: ToolBarArea::Top,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general\nstartup_display_mode = ").expect("write");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config =
            toml::from_str("[general]\nstartup_display_mode = \"full-screen\"\n").expect("parse");
        assert_eq!(
            config.general.startup_display_mode,
            StartupDisplayMode::FullScreen
        );
        assert_eq!(config.interface.control_bar_area, ToolBarArea::Bottom);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn load_with_override_reports_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "general = 3").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn remember_last_collapses_return_to_minimal() {
        let startup = StartupDisplayMode::RememberLast;
        assert_eq!(
            startup.resolve(DisplayMode::FullScreenReturnToMinimal),
            DisplayMode::FullScreen
        );
        assert_eq!(startup.resolve(DisplayMode::Minimal), DisplayMode::Minimal);
        assert_eq!(startup.resolve(DisplayMode::Normal), DisplayMode::Normal);
    }

    #[test]
    fn explicit_startup_mode_ignores_last_session() {
        assert_eq!(
            StartupDisplayMode::Normal.resolve(DisplayMode::FullScreen),
            DisplayMode::Normal
        );
        assert_eq!(
            StartupDisplayMode::Minimal.resolve(DisplayMode::Normal),
            DisplayMode::Minimal
        );
    }
}
