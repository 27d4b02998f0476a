// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Handlers mutate the controller and the playback deck, then turn the
//! controller's [`Effect`]s into window tasks.

use super::persisted_state::AppState;
use super::Message;
use crate::config::{self, Config};
use crate::media::{self, Deck, DiscKind};
use crate::shell::{CloseOutcome, DisplayController, Effect, ToolBarArea};
use crate::ui::menu_bar::{self, Action, Menu};
use crate::ui::{control_bar, navbar, tabs};
use iced::{window, Task};
use std::path::{Path, PathBuf};

/// Mutable application state borrowed by the handlers.
pub struct UpdateContext<'a> {
    pub controller: &'a mut DisplayController,
    pub deck: &'a mut Deck,
    pub app_state: &'a mut AppState,
    pub config: &'a mut Config,
    /// Directory holding both settings and session state. `None` resolves
    /// the usual config and data directories.
    pub storage_dir: Option<&'a Path>,
    pub open_menu: &'a mut Option<Menu>,
    pub url_input: &'a mut Option<String>,
    pub notice: &'a mut Option<String>,
    pub window_id: &'a mut Option<window::Id>,
}

/// Turns controller notifications into window tasks.
pub fn apply_effects(window_id: Option<window::Id>, effects: Vec<Effect>) -> Task<Message> {
    let tasks = effects.into_iter().filter_map(|effect| match effect {
        Effect::ModeChanged(mode) => window_id.map(|id| {
            let window_mode = if mode.is_full_screen() {
                window::Mode::Fullscreen
            } else {
                window::Mode::Windowed
            };
            window::set_mode(id, window_mode)
        }),
        Effect::TabActivated(tab) => {
            log::debug!("surface now hosted by {tab}");
            None
        }
    });
    Task::batch(tasks)
}

pub fn handle_menu_bar_message(ctx: &mut UpdateContext<'_>, message: menu_bar::Message) -> Task<Message> {
    match menu_bar::update(message, ctx.open_menu) {
        Some(menu_bar::Event::Action(action)) => handle_menu_action(ctx, action),
        Some(menu_bar::Event::OpenRecent(entry)) => open_recent(ctx, &entry),
        None => Task::none(),
    }
}

pub fn handle_menu_action(ctx: &mut UpdateContext<'_>, action: Action) -> Task<Message> {
    let effects = match action {
        Action::Open => return handle_open_file_dialog(ctx.app_state.last_open_directory.clone()),
        Action::OpenUrl => {
            *ctx.url_input = Some(String::new());
            return Task::none();
        }
        Action::PlayAudioCd => ctx.deck.play_disc(ctx.controller, DiscKind::AudioCd, None),
        Action::PlayVideoCd => ctx.deck.play_disc(ctx.controller, DiscKind::VideoCd, None),
        Action::PlayDvd => ctx.deck.play_disc(ctx.controller, DiscKind::Dvd, None),
        Action::PlayDvdFolder => {
            return handle_dvd_folder_dialog(ctx.app_state.last_open_directory.clone())
        }
        Action::Quit => {
            let id = *ctx.window_id;
            return handle_close_request(ctx, id);
        }
        Action::ToggleFullScreen => ctx.controller.toggle_full_screen(),
        Action::ToggleMinimalMode => ctx.controller.toggle_minimal_mode(),
        Action::ControlBarAtTop => {
            move_control_bar(ctx, ToolBarArea::Top);
            Vec::new()
        }
        Action::ControlBarAtBottom => {
            move_control_bar(ctx, ToolBarArea::Bottom);
            Vec::new()
        }
        Action::PlayLastChannel => ctx.deck.play_last_channel(ctx.controller),
        Action::ToggleRecording => {
            ctx.deck.television_mut().toggle_recording();
            Vec::new()
        }
    };
    apply_effects(*ctx.window_id, effects)
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    *ctx.open_menu = None;
    let effects = match message {
        navbar::Message::Select(tab) => ctx.controller.activate_tab(tab),
    };
    apply_effects(*ctx.window_id, effects)
}

pub fn handle_control_bar_message(
    ctx: &mut UpdateContext<'_>,
    message: control_bar::Message,
) -> Task<Message> {
    let effects = match message {
        control_bar::Message::TogglePause => {
            ctx.deck.session_mut().toggle_pause();
            Vec::new()
        }
        control_bar::Message::Stop => {
            ctx.deck.session_mut().stop();
            Vec::new()
        }
        control_bar::Message::ToggleFullScreen => ctx.controller.toggle_full_screen(),
        control_bar::Message::ToggleMinimalMode => ctx.controller.toggle_minimal_mode(),
    };
    apply_effects(*ctx.window_id, effects)
}

pub fn handle_tab_message(ctx: &mut UpdateContext<'_>, message: tabs::Message) -> Task<Message> {
    let effects = match message {
        tabs::Message::OpenFile => {
            return handle_open_file_dialog(ctx.app_state.last_open_directory.clone())
        }
        tabs::Message::OpenRecent(entry) => return open_recent(ctx, &entry),
        tabs::Message::PlayDisc(kind) => ctx.deck.play_disc(ctx.controller, kind, None),
        tabs::Message::PlayEntry(index) => {
            ctx.deck.play_entry(index);
            Vec::new()
        }
        tabs::Message::PlayLastChannel => ctx.deck.play_last_channel(ctx.controller),
        tabs::Message::ToggleRecording => {
            ctx.deck.television_mut().toggle_recording();
            Vec::new()
        }
    };
    apply_effects(*ctx.window_id, effects)
}

/// Reopens an entry of the recent list.
pub fn open_recent(ctx: &mut UpdateContext<'_>, entry: &str) -> Task<Message> {
    match media::resolve_url(entry) {
        Some(url) => {
            let effects = ctx.deck.open_url(ctx.controller, url);
            apply_effects(*ctx.window_id, effects)
        }
        None => {
            *ctx.notice = Some(format!("Cannot open {entry}"));
            Task::none()
        }
    }
}

/// Docks the control bar to `area` and stores the choice in the settings.
pub fn move_control_bar(ctx: &mut UpdateContext<'_>, area: ToolBarArea) {
    if ctx.controller.control_bar_area() == area {
        return;
    }
    ctx.controller.set_control_bar_area(area);
    ctx.config.interface.control_bar_area = area;

    let base_dir = ctx.storage_dir.map(Path::to_path_buf);
    if let Err(err) = config::save_with_override(ctx.config, base_dir) {
        log::warn!("failed to save settings: {err}");
    }
}

/// Opens whatever was typed into the URL prompt.
pub fn handle_url_input_submitted(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(input) = ctx.url_input.take() else {
        return Task::none();
    };

    match media::resolve_url(&input) {
        Some(url) => {
            let effects = ctx.deck.open_url(ctx.controller, url);
            apply_effects(*ctx.window_id, effects)
        }
        None => {
            if !input.trim().is_empty() {
                *ctx.notice = Some(format!("Cannot open {input}"));
            }
            Task::none()
        }
    }
}

/// Shows the open dialog. Several files can be picked at once.
pub fn handle_open_file_dialog(last_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().set_title("Open Files");

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog
                .pick_files()
                .await
                .map(|handles| {
                    handles
                        .iter()
                        .map(|handle| handle.path().to_path_buf())
                        .collect()
                })
                .unwrap_or_default()
        },
        Message::OpenFileDialogResult,
    )
}

pub fn handle_open_file_dialog_result(
    ctx: &mut UpdateContext<'_>,
    paths: Vec<PathBuf>,
) -> Task<Message> {
    let Some(first) = paths.first() else {
        return Task::none();
    };
    ctx.app_state.set_last_open_directory_from_file(first);

    let urls = paths
        .iter()
        .filter_map(|path| {
            let url = media::path_to_url(path);
            if url.is_none() {
                log::warn!("cannot open {}", path.display());
            }
            url
        })
        .collect();
    let effects = ctx.deck.open_urls(ctx.controller, urls);
    apply_effects(*ctx.window_id, effects)
}

/// Shows the folder dialog used to play a DVD copied to disk.
pub fn handle_dvd_folder_dialog(last_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().set_title("Play DVD Folder");

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog
                .pick_folder()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::DvdFolderDialogResult,
    )
}

pub fn handle_dvd_folder_dialog_result(
    ctx: &mut UpdateContext<'_>,
    folder: Option<PathBuf>,
) -> Task<Message> {
    let Some(folder) = folder else {
        return Task::none();
    };
    ctx.app_state.last_open_directory = Some(folder.clone());

    let device = folder.to_string_lossy().into_owned();
    let effects = ctx.deck.play_disc(ctx.controller, DiscKind::Dvd, Some(device));
    apply_effects(*ctx.window_id, effects)
}

/// Asks the collaborators whether the window may close and closes it when
/// nobody objects. Without a window the application exits directly.
pub fn handle_close_request(ctx: &mut UpdateContext<'_>, id: Option<window::Id>) -> Task<Message> {
    match ctx.controller.on_close_requested(ctx.deck.close_guards()) {
        CloseOutcome::Proceed => {
            persist_session(ctx);
            match id {
                Some(id) => window::close(id),
                None => iced::exit(),
            }
        }
        CloseOutcome::Vetoed(guards) => {
            *ctx.notice = Some(format!("Closing is blocked by {}", guards.join(", ")));
            Task::none()
        }
    }
}

/// Writes the display mode, recent URLs and last channel to the state file.
pub fn persist_session(ctx: &mut UpdateContext<'_>) {
    let app_state = &mut *ctx.app_state;
    app_state.remember_display_mode(ctx.controller.display_mode());
    app_state.recent_urls = ctx.deck.recent_urls().to_vec();
    app_state.last_channel = ctx.deck.television().last_channel().map(str::to_string);
    if let Err(err) = app_state.save_to(ctx.storage_dir.map(Path::to_path_buf)) {
        log::warn!("failed to save session state: {err}");
    }
}
