// SPDX-License-Identifier: MPL-2.0
//! Playback control bar.

use crate::shell::DisplayMode;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, Container, Row, Space, Text};
use iced::{Element, Length};

pub struct ViewContext {
    pub caption: Option<String>,
    pub has_media: bool,
    pub paused: bool,
    pub mode: DisplayMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    TogglePause,
    Stop,
    ToggleFullScreen,
    ToggleMinimalMode,
}

pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let pause_label = if ctx.paused { "Play" } else { "Pause" };
    let mut pause = button(Text::new(pause_label)).style(styles::button::overlay);
    let mut stop = button(Text::new("Stop")).style(styles::button::overlay);
    if ctx.has_media {
        pause = pause.on_press(Message::TogglePause);
        stop = stop.on_press(Message::Stop);
    }

    let full_screen_label = if ctx.mode.is_full_screen() {
        "Leave Full Screen"
    } else {
        "Full Screen"
    };
    let minimal_label = if ctx.mode == DisplayMode::Minimal {
        "Leave Minimal Mode"
    } else {
        "Minimal Mode"
    };

    let caption = Text::new(ctx.caption.unwrap_or_else(|| String::from("Nothing playing")))
        .size(typography::CAPTION);

    let row = Row::new()
        .spacing(spacing::XS)
        .padding(spacing::XS)
        .height(sizing::BUTTON_HEIGHT + 2.0 * spacing::XS)
        .align_y(Vertical::Center)
        .push(pause)
        .push(stop)
        .push(caption)
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(minimal_label))
                .style(styles::button::overlay)
                .on_press(Message::ToggleMinimalMode),
        )
        .push(
            button(Text::new(full_screen_label))
                .style(styles::button::overlay)
                .on_press(Message::ToggleFullScreen),
        );

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::control_bar)
        .into()
}
