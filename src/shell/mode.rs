// SPDX-License-Identifier: MPL-2.0
//! Display modes of the main window.
//!
//! A display mode decides how much window chrome is visible and whether
//! the window covers the whole screen. `FullScreenReturnToMinimal` is a
//! fullscreen mode that remembers it was entered from `Minimal`, so that
//! toggling fullscreen off lands back in `Minimal` instead of `Normal`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Persisted code for [`DisplayMode::Normal`].
pub const NORMAL_MODE_CODE: u8 = 0;
/// Persisted code for [`DisplayMode::Minimal`].
pub const MINIMAL_MODE_CODE: u8 = 1;
/// Persisted code shared by both fullscreen modes.
pub const FULL_SCREEN_MODE_CODE: u8 = 2;

/// How the main window presents its chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    /// Menu, navigation and control bars are visible.
    #[default]
    Normal,
    /// Windowed, without chrome.
    Minimal,
    /// Fullscreen, without chrome.
    FullScreen,
    /// Fullscreen entered from [`DisplayMode::Minimal`].
    FullScreenReturnToMinimal,
}

impl DisplayMode {
    /// Returns true when menu, navigation and control bars are hidden by
    /// default and only revealed by the pointer.
    #[must_use]
    pub fn hides_chrome(self) -> bool {
        !matches!(self, DisplayMode::Normal)
    }

    /// Returns true when the native window should cover the screen.
    #[must_use]
    pub fn is_full_screen(self) -> bool {
        matches!(
            self,
            DisplayMode::FullScreen | DisplayMode::FullScreenReturnToMinimal
        )
    }

    /// Mode reached by the "full screen" toggle.
    #[must_use]
    pub fn toggled_full_screen(self) -> Self {
        match self {
            DisplayMode::Normal => DisplayMode::FullScreen,
            DisplayMode::Minimal => DisplayMode::FullScreenReturnToMinimal,
            DisplayMode::FullScreen => DisplayMode::Normal,
            DisplayMode::FullScreenReturnToMinimal => DisplayMode::Minimal,
        }
    }

    /// Mode reached by the "minimal mode" toggle.
    #[must_use]
    pub fn toggled_minimal(self) -> Self {
        match self {
            DisplayMode::Normal => DisplayMode::Minimal,
            DisplayMode::Minimal => DisplayMode::Normal,
            DisplayMode::FullScreen | DisplayMode::FullScreenReturnToMinimal => {
                DisplayMode::Minimal
            }
        }
    }

    /// Integer code written to the state file on exit.
    ///
    /// Both fullscreen modes share a code: the "return to minimal" intent
    /// does not survive a restart.
    #[must_use]
    pub fn persisted_code(self) -> u8 {
        match self {
            DisplayMode::Normal => NORMAL_MODE_CODE,
            DisplayMode::Minimal => MINIMAL_MODE_CODE,
            DisplayMode::FullScreen | DisplayMode::FullScreenReturnToMinimal => {
                FULL_SCREEN_MODE_CODE
            }
        }
    }

    /// Restores a mode from its persisted code. Unknown codes restore as
    /// [`DisplayMode::Normal`].
    #[must_use]
    pub fn from_persisted_code(code: u8) -> Self {
        match code {
            MINIMAL_MODE_CODE => DisplayMode::Minimal,
            FULL_SCREEN_MODE_CODE => DisplayMode::FullScreen,
            _ => DisplayMode::Normal,
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DisplayMode::Normal => "normal",
            DisplayMode::Minimal => "minimal",
            DisplayMode::FullScreen => "full screen",
            DisplayMode::FullScreenReturnToMinimal => "full screen (return to minimal)",
        };
        f.write_str(name)
    }
}
