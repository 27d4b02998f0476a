// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the display controller to the playback deck and
//! the window. Startup policy (startup display mode, launch options) and
//! session persistence live here so user-facing behavior is easy to audit.

mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::config::{WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH};
use crate::launch;
use crate::media::Deck;
use crate::shell::{DisplayController, DisplayMode, InputEvent, TabId, TabSet};
use crate::ui::menu_bar::Menu;
use iced::{window, Element, Size, Subscription, Task, Theme};
use persisted_state::AppState;
use std::fmt;
use std::path::PathBuf;

const APP_TITLE: &str = "MediaDeck";

/// Root Iced application state.
pub struct App {
    controller: DisplayController,
    deck: Deck,
    app_state: AppState,
    config: Config,
    /// Overrides both the config and data directories when set.
    storage_dir: Option<PathBuf>,
    window_id: Option<window::Id>,
    window_height: f32,
    open_menu: Option<Menu>,
    url_input: Option<String>,
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("display_mode", &self.controller.display_mode())
            .field("visible_tab", &self.controller.visible_tab())
            .finish()
    }
}

/// Builds the window settings. The window stays open on a close request
/// until every collaborator agreed.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a Fn boot closure; the flags are only consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            log::warn!("{warning}");
        }
        let (app_state, state_warning) = AppState::load();
        if let Some(warning) = state_warning {
            log::warn!("{warning}");
        }

        let app = Self::from_parts(config, app_state, &flags);
        (app, Task::none())
    }

    /// Builds the initial state: startup display mode first, then the
    /// launch options on top of it.
    fn from_parts(config: Config, app_state: AppState, flags: &Flags) -> Self {
        let mut controller =
            DisplayController::new(TabSet::standard(), config.interface.control_bar_area);
        let mut deck = Deck::with_recent(app_state.recent_urls.clone());
        deck.television_mut()
            .set_last_channel(app_state.last_channel.clone());

        let startup_mode = config
            .general
            .startup_display_mode
            .resolve(app_state.last_display_mode());
        // The window does not exist yet; its mode is synced once it opens.
        let _ = controller.set_display_mode(startup_mode);

        let plan = launch::resolve(&flags.launch, controller.tabs().contains(TabId::Television));
        let _ = launch::apply(plan, &mut controller, &mut deck);

        Self {
            controller,
            deck,
            app_state,
            config,
            storage_dir: None,
            window_id: None,
            window_height: WINDOW_DEFAULT_HEIGHT,
            open_menu: None,
            url_input: None,
            notice: None,
        }
    }

    fn title(&self) -> String {
        match self.deck.session().caption() {
            Some(caption) => format!("{caption} - {APP_TITLE}"),
            None => APP_TITLE.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        self.config.general.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_window_subscription(),
            subscription::create_tick_subscription(self.controller.is_idle_timer_armed()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            controller: &mut self.controller,
            deck: &mut self.deck,
            app_state: &mut self.app_state,
            config: &mut self.config,
            storage_dir: self.storage_dir.as_deref(),
            open_menu: &mut self.open_menu,
            url_input: &mut self.url_input,
            notice: &mut self.notice,
            window_id: &mut self.window_id,
        };

        match message {
            Message::MenuBar(menu_message) => update::handle_menu_bar_message(&mut ctx, menu_message),
            Message::Navbar(navbar_message) => update::handle_navbar_message(&mut ctx, navbar_message),
            Message::ControlBar(bar_message) => {
                update::handle_control_bar_message(&mut ctx, bar_message)
            }
            Message::Tab(tab_message) => update::handle_tab_message(&mut ctx, tab_message),
            Message::UrlInputChanged(value) => {
                self.url_input = Some(value);
                Task::none()
            }
            Message::UrlInputSubmitted => update::handle_url_input_submitted(&mut ctx),
            Message::UrlInputCancelled => {
                self.url_input = None;
                Task::none()
            }
            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }
            Message::OpenFileDialogResult(paths) => {
                update::handle_open_file_dialog_result(&mut ctx, paths)
            }
            Message::DvdFolderDialogResult(folder) => {
                update::handle_dvd_folder_dialog_result(&mut ctx, folder)
            }
            Message::WindowOpened(id) => {
                self.window_id = Some(id);
                // Startup may already have entered a full screen mode.
                if self.controller.display_mode().is_full_screen() {
                    window::set_mode(id, window::Mode::Fullscreen)
                } else {
                    Task::none()
                }
            }
            Message::WindowResized(size) => {
                self.window_height = size.height;
                Task::none()
            }
            Message::CursorMoved(position) => {
                let effects = self.controller.handle_input(InputEvent::PointerMoved {
                    y: position.y,
                    height: self.window_height,
                });
                update::apply_effects(self.window_id, effects)
            }
            Message::CursorLeft => {
                let effects = self.controller.handle_input(InputEvent::PointerLeft);
                update::apply_effects(self.window_id, effects)
            }
            Message::KeyPressed(key) => {
                let effects = self.controller.handle_input(InputEvent::KeyPressed(key));
                update::apply_effects(self.window_id, effects)
            }
            Message::WindowCloseRequested(id) => update::handle_close_request(&mut ctx, Some(id)),
            Message::Tick(now) => {
                self.controller.tick(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            controller: &self.controller,
            deck: &self.deck,
            open_menu: self.open_menu,
            url_input: self.url_input.as_deref(),
            notice: self.notice.as_deref(),
        })
    }

    /// Display mode the window is in.
    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        self.controller.display_mode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StartupDisplayMode;
    use crate::launch::LaunchOptions;

    fn flags(launch: LaunchOptions) -> Flags {
        Flags { launch }
    }

    #[test]
    fn remembered_mode_is_restored_at_startup() {
        let mut config = Config::default();
        config.general.startup_display_mode = StartupDisplayMode::RememberLast;
        let mut state = AppState::default();
        state.remember_display_mode(DisplayMode::Minimal);

        let app = App::from_parts(config, state, &Flags::default());

        assert_eq!(app.display_mode(), DisplayMode::Minimal);
        assert!(app.controller.is_auto_hiding());
    }

    #[test]
    fn fullscreen_option_overrides_startup_mode() {
        let mut config = Config::default();
        config.general.startup_display_mode = StartupDisplayMode::Minimal;
        let launch = LaunchOptions {
            fullscreen: true,
            ..LaunchOptions::default()
        };

        let app = App::from_parts(config, AppState::default(), &flags(launch));

        assert_eq!(app.display_mode(), DisplayMode::FullScreen);
    }

    #[test]
    fn title_shows_caption_of_current_playback() {
        let launch = LaunchOptions {
            files: vec!["https://example.org/show.ogg".to_string()],
            ..LaunchOptions::default()
        };

        let app = App::from_parts(Config::default(), AppState::default(), &flags(launch));

        assert_eq!(app.title(), "show.ogg - MediaDeck");
        assert_eq!(app.controller.visible_tab(), TabId::Player);
    }

    #[test]
    fn title_shows_app_name_when_idle() {
        let app = App::from_parts(Config::default(), AppState::default(), &Flags::default());
        assert_eq!(app.title(), "MediaDeck");
    }

    #[cfg(feature = "television")]
    #[test]
    fn last_channel_launch_option_uses_persisted_channel() {
        let state = AppState {
            last_channel: Some("Arte".to_string()),
            ..AppState::default()
        };
        let launch = LaunchOptions {
            last_channel: true,
            ..LaunchOptions::default()
        };

        let app = App::from_parts(Config::default(), state, &flags(launch));

        assert_eq!(app.title(), "Arte - MediaDeck");
        assert_eq!(app.controller.current_tab(), TabId::Television);
    }

    #[test]
    fn recent_urls_are_seeded_from_state() {
        let state = AppState {
            recent_urls: vec!["https://example.org/a.ogg".to_string()],
            ..AppState::default()
        };

        let app = App::from_parts(Config::default(), state, &Flags::default());

        assert_eq!(app.deck.recent_urls(), ["https://example.org/a.ogg"]);
    }
}
