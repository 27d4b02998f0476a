// SPDX-License-Identifier: MPL-2.0
//! Settings and session state stored through temporary directories.

use media_deck::app::persisted_state::AppState;
use media_deck::config::{self, Config, StartupDisplayMode};
use media_deck::shell::{DisplayMode, ToolBarArea};
use std::fs;
use tempfile::tempdir;

#[test]
fn settings_written_by_hand_are_understood() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("settings.toml");
    fs::write(
        &path,
        "[general]\ntheme_mode = \"dark\"\nstartup_display_mode = \"remember-last\"\n\n\
         [interface]\ncontrol_bar_area = \"top\"\n",
    )
    .expect("write settings");

    let config = config::load_from_path(&path).expect("load settings");

    assert_eq!(
        config.general.startup_display_mode,
        StartupDisplayMode::RememberLast
    );
    assert_eq!(config.interface.control_bar_area, ToolBarArea::Top);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("settings.toml");
    fs::write(&path, "").expect("write settings");

    let config = config::load_from_path(&path).expect("load settings");

    assert_eq!(config, Config::default());
}

#[test]
fn full_screen_session_restores_as_full_screen() {
    let dir = tempdir().expect("create temp dir");

    let mut state = AppState::default();
    state.remember_display_mode(DisplayMode::FullScreenReturnToMinimal);
    state
        .save_to(Some(dir.path().to_path_buf()))
        .expect("save state");

    let (loaded, warning) = AppState::load_from(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let startup = StartupDisplayMode::RememberLast.resolve(loaded.last_display_mode());
    assert_eq!(startup, DisplayMode::FullScreen);
}
