// SPDX-License-Identifier: MPL-2.0
//! Visibility of the window chrome.
//!
//! The controller only flips these flags; translating them into native
//! window state (fullscreen flag, hidden cursor) happens in the app layer.

use serde::{Deserialize, Serialize};

/// Height in pixels of the band along the docked edge that reveals the
/// control bar while chrome is auto-hidden.
pub const CONTROL_BAR_REVEAL_ZONE: f32 = 60.0;

/// Window edge the control bar is docked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolBarArea {
    Top,
    #[default]
    Bottom,
}

impl ToolBarArea {
    /// Returns true when `y` lies within the reveal zone of this edge.
    ///
    /// Callers must have checked `0 <= y < height`.
    #[must_use]
    pub fn reveals(self, y: f32, height: f32) -> bool {
        match self {
            ToolBarArea::Top => y < CONTROL_BAR_REVEAL_ZONE,
            ToolBarArea::Bottom => y >= height - CONTROL_BAR_REVEAL_ZONE,
        }
    }
}

/// Current chrome flags of the main window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeState {
    pub menu_bar_visible: bool,
    pub navigation_bar_visible: bool,
    pub control_bar_visible: bool,
    pub window_full_screen: bool,
    pub cursor_hidden: bool,
}

impl ChromeState {
    /// All bars visible, windowed, cursor shown.
    #[must_use]
    pub fn shown() -> Self {
        Self {
            menu_bar_visible: true,
            navigation_bar_visible: true,
            control_bar_visible: true,
            window_full_screen: false,
            cursor_hidden: false,
        }
    }

    pub(crate) fn show_bars(&mut self) {
        self.menu_bar_visible = true;
        self.navigation_bar_visible = true;
        self.control_bar_visible = true;
    }

    pub(crate) fn hide_bars(&mut self) {
        self.menu_bar_visible = false;
        self.navigation_bar_visible = false;
        self.control_bar_visible = false;
    }
}

impl Default for ChromeState {
    fn default() -> Self {
        Self::shown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_edge_reveals_last_sixty_pixels() {
        assert!(ToolBarArea::Bottom.reveals(350.0, 400.0));
        assert!(ToolBarArea::Bottom.reveals(340.0, 400.0));
        assert!(!ToolBarArea::Bottom.reveals(339.5, 400.0));
        assert!(!ToolBarArea::Bottom.reveals(100.0, 400.0));
    }

    #[test]
    fn top_edge_reveals_first_sixty_pixels() {
        assert!(ToolBarArea::Top.reveals(0.0, 400.0));
        assert!(ToolBarArea::Top.reveals(59.0, 400.0));
        assert!(!ToolBarArea::Top.reveals(60.0, 400.0));
    }

    #[test]
    fn hide_and_show_bars_leave_window_flags_alone() {
        let mut chrome = ChromeState {
            window_full_screen: true,
            cursor_hidden: true,
            ..ChromeState::shown()
        };
        chrome.hide_bars();
        assert!(!chrome.menu_bar_visible);
        assert!(!chrome.control_bar_visible);
        assert!(chrome.window_full_screen);

        chrome.show_bars();
        assert!(chrome.navigation_bar_visible);
        assert!(chrome.cursor_hidden);
    }
}
