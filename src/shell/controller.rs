// SPDX-License-Identifier: MPL-2.0
//! Display mode controller.
//!
//! Owns the display mode, the tab selection, chrome auto-hiding and the
//! idle cursor timer. It never touches a toolkit: inputs arrive as method
//! calls or [`InputEvent`]s and outbound notifications leave as
//! [`Effect`]s for the app layer to apply.
//!
//! Tab selection and visible content are tracked separately. While chrome
//! is auto-hidden the visible content is pinned to the player, but new
//! selections are still recorded and applied on the way back to
//! [`DisplayMode::Normal`].

use super::chrome::{ChromeState, ToolBarArea};
use super::close::{self, CloseGuard, CloseOutcome};
use super::idle_timer::IdleTimer;
use super::mode::DisplayMode;
use super::surface::SurfaceLease;
use super::tab::{TabId, TabSet};
use std::time::Instant;

/// Keys the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

/// Toolkit-independent input delivered to [`DisplayController::handle_input`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerMoved { y: f32, height: f32 },
    PointerLeft,
    KeyPressed(Key),
    TimerFired,
}

/// Notifications for the collaborators of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The display mode changed; the window layer must follow
    /// [`DisplayMode::is_full_screen`].
    ModeChanged(DisplayMode),
    /// The tab became the visible content. Tabs that host the rendering
    /// surface own it from now on.
    TabActivated(TabId),
}

/// State machine behind the main window chrome.
#[derive(Debug, Clone)]
pub struct DisplayController {
    mode: DisplayMode,
    tabs: TabSet,
    current_tab: TabId,
    visible_tab: TabId,
    auto_hide_control_bar: bool,
    control_bar_area: ToolBarArea,
    chrome: ChromeState,
    idle_timer: IdleTimer,
    surface: SurfaceLease,
}

impl DisplayController {
    #[must_use]
    pub fn new(tabs: TabSet, control_bar_area: ToolBarArea) -> Self {
        Self {
            mode: DisplayMode::Normal,
            tabs,
            current_tab: TabId::Start,
            visible_tab: TabId::Start,
            auto_hide_control_bar: false,
            control_bar_area,
            chrome: ChromeState::shown(),
            idle_timer: IdleTimer::default(),
            surface: SurfaceLease::new(TabId::Player),
        }
    }

    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        self.mode
    }

    /// Tab most recently selected, shown again whenever chrome is visible.
    #[must_use]
    pub fn current_tab(&self) -> TabId {
        self.current_tab
    }

    /// Tab whose content currently fills the main region.
    #[must_use]
    pub fn visible_tab(&self) -> TabId {
        self.visible_tab
    }

    #[must_use]
    pub fn tabs(&self) -> &TabSet {
        &self.tabs
    }

    #[must_use]
    pub fn is_auto_hiding(&self) -> bool {
        self.auto_hide_control_bar
    }

    #[must_use]
    pub fn chrome(&self) -> ChromeState {
        self.chrome
    }

    #[must_use]
    pub fn control_bar_area(&self) -> ToolBarArea {
        self.control_bar_area
    }

    /// Moves the control bar to another edge. Takes effect on the next
    /// pointer move.
    pub fn set_control_bar_area(&mut self, area: ToolBarArea) {
        self.control_bar_area = area;
    }

    #[must_use]
    pub fn is_idle_timer_armed(&self) -> bool {
        self.idle_timer.is_armed()
    }

    /// Tab currently hosting the shared rendering surface.
    #[must_use]
    pub fn surface_owner(&self) -> TabId {
        self.surface.owner()
    }

    /// Switches the display mode and applies its chrome policy.
    ///
    /// Requesting the active mode does nothing.
    pub fn set_display_mode(&mut self, mode: DisplayMode) -> Vec<Effect> {
        if mode == self.mode {
            return Vec::new();
        }

        log::debug!("display mode {} -> {}", self.mode, mode);
        self.mode = mode;
        self.chrome.window_full_screen = mode.is_full_screen();

        let mut effects = vec![Effect::ModeChanged(mode)];

        if mode.hides_chrome() {
            self.chrome.hide_bars();
            self.auto_hide_control_bar = true;
            self.idle_timer.arm();
            effects.extend(self.show_tab(TabId::Player));
        } else {
            self.chrome.show_bars();
            self.auto_hide_control_bar = false;
            self.idle_timer.disarm();
            self.chrome.cursor_hidden = false;
            effects.extend(self.show_tab(self.current_tab));
        }

        effects
    }

    /// Switches between windowed and fullscreen, remembering whether
    /// fullscreen was entered from minimal mode.
    pub fn toggle_full_screen(&mut self) -> Vec<Effect> {
        self.set_display_mode(self.mode.toggled_full_screen())
    }

    pub fn toggle_minimal_mode(&mut self) -> Vec<Effect> {
        self.set_display_mode(self.mode.toggled_minimal())
    }

    /// Selects a tab. While chrome is auto-hidden only the selection is
    /// recorded; the player stays visible.
    ///
    /// Tabs outside the configured set are a caller bug.
    pub fn activate_tab(&mut self, tab: TabId) -> Vec<Effect> {
        debug_assert!(
            self.tabs.contains(tab),
            "tab {tab} is not part of the configured tab set"
        );
        if !self.tabs.contains(tab) {
            log::warn!("ignoring activation of unavailable tab {tab}");
            return Vec::new();
        }

        self.current_tab = tab;

        if self.auto_hide_control_bar {
            log::debug!("tab {tab} selected while chrome is hidden");
            return Vec::new();
        }

        self.show_tab(tab).into_iter().collect()
    }

    /// Selects a tab by its navigation bar position.
    pub fn activate_tab_index(&mut self, index: usize) -> Vec<Effect> {
        debug_assert!(index < self.tabs.len(), "tab index {index} out of range");
        let Some(tab) = self.tabs.get(index) else {
            log::warn!("ignoring activation of tab index {index}");
            return Vec::new();
        };
        self.activate_tab(tab)
    }

    /// Pointer moved to `y` inside a window of `height` pixels.
    pub fn on_pointer_move(&mut self, y: f32, height: f32) {
        // Toolkits occasionally report coordinates outside the window.
        if !(y >= 0.0 && y < height) {
            return;
        }
        if !self.auto_hide_control_bar {
            return;
        }

        self.idle_timer.disarm();
        self.chrome.cursor_hidden = false;
        self.chrome.control_bar_visible = self.control_bar_area.reveals(y, height);

        if !self.chrome.control_bar_visible {
            self.idle_timer.arm();
        }
    }

    /// Pointer left the window.
    pub fn on_pointer_left(&mut self) {
        if self.auto_hide_control_bar {
            self.chrome.control_bar_visible = false;
        }
    }

    /// The idle timer elapsed without pointer activity.
    pub fn on_idle_timeout(&mut self) {
        if self.auto_hide_control_bar {
            self.chrome.cursor_hidden = true;
        }
    }

    /// Escape leaves every chrome-less mode for [`DisplayMode::Normal`].
    pub fn on_escape(&mut self) -> Vec<Effect> {
        if self.mode.hides_chrome() {
            self.set_display_mode(DisplayMode::Normal)
        } else {
            Vec::new()
        }
    }

    /// Asks every guard whether the window may close. Never changes the
    /// controller state.
    pub fn on_close_requested<'a, I>(&self, guards: I) -> CloseOutcome
    where
        I: IntoIterator<Item = &'a mut dyn CloseGuard>,
    {
        let outcome = close::vote(guards);
        if let CloseOutcome::Vetoed(names) = &outcome {
            log::warn!("close vetoed by {}", names.join(", "));
        }
        outcome
    }

    /// Fires the idle timer if its deadline passed at `now`.
    ///
    /// Returns true when the timer fired.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.idle_timer.poll(now) {
            self.on_idle_timeout();
            true
        } else {
            false
        }
    }

    /// Dispatches a typed input event.
    pub fn handle_input(&mut self, event: InputEvent) -> Vec<Effect> {
        match event {
            InputEvent::PointerMoved { y, height } => {
                self.on_pointer_move(y, height);
                Vec::new()
            }
            InputEvent::PointerLeft => {
                self.on_pointer_left();
                Vec::new()
            }
            InputEvent::KeyPressed(Key::Escape) => self.on_escape(),
            InputEvent::KeyPressed(Key::Other) => Vec::new(),
            InputEvent::TimerFired => {
                self.idle_timer.disarm();
                self.on_idle_timeout();
                Vec::new()
            }
        }
    }

    /// Makes `tab` the visible content and hands it the surface when it
    /// can host it.
    fn show_tab(&mut self, tab: TabId) -> Option<Effect> {
        let switched = self.visible_tab != tab;
        self.visible_tab = tab;

        let transfer = if hosts_surface(tab) {
            self.surface.transfer_to(tab)
        } else {
            None
        };
        if let Some(transfer) = transfer {
            log::debug!("surface moved from {} to {}", transfer.from, transfer.to);
        }
        let transferred = transfer.is_some();

        (switched || transferred).then_some(Effect::TabActivated(tab))
    }
}

impl Default for DisplayController {
    fn default() -> Self {
        Self::new(TabSet::standard(), ToolBarArea::default())
    }
}

fn hosts_surface(tab: TabId) -> bool {
    matches!(tab, TabId::Player | TabId::Playlist | TabId::Television)
}
