// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::launch::LaunchOptions;
use crate::shell::Key;
use crate::ui::{control_bar, menu_bar, navbar, tabs};
use iced::{window, Point, Size};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level widget messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    MenuBar(menu_bar::Message),
    Navbar(navbar::Message),
    ControlBar(control_bar::Message),
    Tab(tabs::Message),
    UrlInputChanged(String),
    UrlInputSubmitted,
    UrlInputCancelled,
    DismissNotice,
    /// Result from the open file dialog.
    OpenFileDialogResult(Vec<PathBuf>),
    /// Result from the DVD folder dialog.
    DvdFolderDialogResult(Option<PathBuf>),
    WindowOpened(window::Id),
    WindowResized(Size),
    CursorMoved(Point),
    CursorLeft,
    KeyPressed(Key),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(window::Id),
    /// Polls the idle cursor timer while it is armed.
    Tick(Instant),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    pub launch: LaunchOptions,
}
