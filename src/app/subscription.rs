// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native window, mouse and keyboard events are translated into the
//! toolkit-independent inputs the display controller understands.

use super::Message;
use crate::config::IDLE_POLL_INTERVAL_MS;
use crate::shell::Key;
use crate::ui::menu_bar::{self, Action};
use iced::keyboard::{self, key::Named, Modifiers};
use iced::{event, mouse, time, window, Event, Subscription};
use std::time::Duration;

/// Routes window, pointer and keyboard events.
///
/// Close requests and pointer events are forwarded regardless of capture
/// status; keyboard shortcuts only when no widget consumed the key.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        Event::Mouse(mouse::Event::CursorMoved { position }) => Some(Message::CursorMoved(position)),
        Event::Mouse(mouse::Event::CursorLeft) => Some(Message::CursorLeft),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => match status {
            event::Status::Ignored => key_message(&key, modifiers),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

fn key_message(key: &keyboard::Key, modifiers: Modifiers) -> Option<Message> {
    let character = match key.as_ref() {
        keyboard::Key::Named(Named::Escape) => return Some(Message::KeyPressed(Key::Escape)),
        keyboard::Key::Character(c) if modifiers.command() => c.to_ascii_lowercase(),
        _ => return None,
    };

    let action = match (character.as_str(), modifiers.shift()) {
        ("f", true) => Action::ToggleFullScreen,
        ("m", false) => Action::ToggleMinimalMode,
        ("o", false) => Action::Open,
        ("q", false) => Action::Quit,
        _ => return None,
    };
    Some(menu_action(action))
}

fn menu_action(action: Action) -> Message {
    Message::MenuBar(menu_bar::Message::Select(action))
}

/// Reports the main window id once it is open.
pub fn create_window_subscription() -> Subscription<Message> {
    window::open_events().map(Message::WindowOpened)
}

/// Polls the idle cursor timer, only while it is armed.
pub fn create_tick_subscription(idle_timer_armed: bool) -> Subscription<Message> {
    if idle_timer_armed {
        time::every(Duration::from_millis(IDLE_POLL_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
