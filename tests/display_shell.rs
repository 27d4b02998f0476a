// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios across the controller, launch options and the
//! playback deck.

use media_deck::launch::{self, LaunchOptions};
use media_deck::media::Deck;
use media_deck::shell::{
    CloseDecision, CloseGuard, DisplayController, DisplayMode, Effect, InputEvent, Key, TabId,
    TabSet, ToolBarArea, CURSOR_HIDE_DELAY,
};
use std::time::Instant;

fn controller() -> DisplayController {
    DisplayController::new(TabSet::new(true), ToolBarArea::Bottom)
}

#[test]
fn watching_in_full_screen_and_leaving_with_escape() {
    let mut controller = controller();
    let mut deck = Deck::new();
    controller.activate_tab(TabId::Playlist);

    let launch = LaunchOptions {
        fullscreen: true,
        files: vec![
            "https://example.org/one.ogg".to_string(),
            "https://example.org/two.ogg".to_string(),
        ],
        ..LaunchOptions::default()
    };
    launch::apply(
        launch::resolve(&launch, true),
        &mut controller,
        &mut deck,
    );

    // Content stays pinned to the player while chrome is hidden.
    assert_eq!(controller.display_mode(), DisplayMode::FullScreen);
    assert_eq!(controller.visible_tab(), TabId::Player);
    assert_eq!(controller.current_tab(), TabId::Playlist);

    // Idle pointer hides the cursor; moving to the bottom edge reveals the bar.
    assert!(controller.tick(Instant::now() + CURSOR_HIDE_DELAY));
    assert!(controller.chrome().cursor_hidden);
    controller.handle_input(InputEvent::PointerMoved {
        y: 700.0,
        height: 720.0,
    });
    assert!(controller.chrome().control_bar_visible);
    assert!(!controller.chrome().cursor_hidden);

    let effects = controller.handle_input(InputEvent::KeyPressed(Key::Escape));
    assert_eq!(
        effects,
        vec![
            Effect::ModeChanged(DisplayMode::Normal),
            Effect::TabActivated(TabId::Playlist)
        ]
    );
    assert!(controller.chrome().menu_bar_visible);
    assert!(controller.chrome().navigation_bar_visible);
}

#[test]
fn minimal_round_trip_through_full_screen() {
    let mut controller = controller();

    controller.toggle_minimal_mode();
    controller.toggle_full_screen();
    assert!(controller.chrome().window_full_screen);

    controller.toggle_full_screen();
    assert_eq!(controller.display_mode(), DisplayMode::Minimal);
    assert!(!controller.chrome().window_full_screen);
    assert!(controller.is_auto_hiding());
}

struct Unsaved;

impl CloseGuard for Unsaved {
    fn name(&self) -> &str {
        "unsaved"
    }

    fn may_close(&mut self) -> CloseDecision {
        CloseDecision::Veto
    }
}

#[test]
fn close_is_vetoed_by_any_collaborator() {
    let controller = controller();
    let mut deck = Deck::new();
    let mut unsaved = Unsaved;

    let [playlist, television] = deck.close_guards();
    let outcome = controller.on_close_requested([
        playlist,
        television,
        &mut unsaved as &mut dyn CloseGuard,
    ]);

    assert!(outcome.is_vetoed());
}
