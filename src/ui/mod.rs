// SPDX-License-Identifier: MPL-2.0
//! Widgets of the main window.
//!
//! Each bar follows the "state down, messages up" pattern: a `ViewContext`
//! carries what the view needs and a local `Message` enum reports back.
//!
//! - [`menu_bar`] - File, View and Television menus
//! - [`navbar`] - Tab selection
//! - [`control_bar`] - Playback and display mode buttons
//! - [`tabs`] - Content of each tab
//! - [`styles`], [`design_tokens`] - Shared styling
//! - [`theming`] - Light/Dark/System theme mode

pub mod control_bar;
pub mod design_tokens;
pub mod menu_bar;
pub mod navbar;
pub mod styles;
pub mod tabs;
pub mod theming;
