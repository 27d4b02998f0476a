// SPDX-License-Identifier: MPL-2.0
//! Menu bar with File, View and Television menus.
//!
//! At most one menu is open at a time; its entries are rendered as a
//! drop-down row under the bar. The File menu lists recently opened URLs
//! under its open commands.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    File,
    View,
    Television,
}

impl Menu {
    fn label(self) -> &'static str {
        match self {
            Menu::File => "File",
            Menu::View => "View",
            Menu::Television => "Television",
        }
    }

    fn entries(self) -> &'static [Action] {
        match self {
            Menu::File => &[
                Action::Open,
                Action::OpenUrl,
                Action::PlayAudioCd,
                Action::PlayVideoCd,
                Action::PlayDvd,
                Action::PlayDvdFolder,
                Action::Quit,
            ],
            Menu::View => &[
                Action::ToggleFullScreen,
                Action::ToggleMinimalMode,
                Action::ControlBarAtTop,
                Action::ControlBarAtBottom,
            ],
            Menu::Television => &[Action::PlayLastChannel, Action::ToggleRecording],
        }
    }
}

/// Commands offered by the menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Open,
    OpenUrl,
    PlayAudioCd,
    PlayVideoCd,
    PlayDvd,
    PlayDvdFolder,
    Quit,
    ToggleFullScreen,
    ToggleMinimalMode,
    ControlBarAtTop,
    ControlBarAtBottom,
    PlayLastChannel,
    ToggleRecording,
}

impl Action {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Action::Open => "Open…",
            Action::OpenUrl => "Open URL…",
            Action::PlayAudioCd => "Play Audio CD",
            Action::PlayVideoCd => "Play Video CD",
            Action::PlayDvd => "Play DVD",
            Action::PlayDvdFolder => "Play DVD Folder…",
            Action::Quit => "Quit",
            Action::ToggleFullScreen => "Full Screen Mode",
            Action::ToggleMinimalMode => "Minimal Mode",
            Action::ControlBarAtTop => "Control Bar at Top",
            Action::ControlBarAtBottom => "Control Bar at Bottom",
            Action::PlayLastChannel => "Play Last Channel",
            Action::ToggleRecording => "Instant Record",
        }
    }
}

pub struct ViewContext<'a> {
    pub open: Option<Menu>,
    pub television: bool,
    /// Recently opened URLs, most recent first.
    pub recent: &'a [String],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Toggle(Menu),
    Close,
    Select(Action),
    OpenRecent(String),
}

/// What the user picked from a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Action(Action),
    OpenRecent(String),
}

/// Applies a menu bar message and returns the user's pick, if any.
pub fn update(message: Message, open: &mut Option<Menu>) -> Option<Event> {
    match message {
        Message::Toggle(menu) => {
            *open = if *open == Some(menu) { None } else { Some(menu) };
            None
        }
        Message::Close => {
            *open = None;
            None
        }
        Message::Select(action) => {
            *open = None;
            Some(Event::Action(action))
        }
        Message::OpenRecent(entry) => {
            *open = None;
            Some(Event::OpenRecent(entry))
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut menus = vec![Menu::File, Menu::View];
    if ctx.television {
        menus.push(Menu::Television);
    }

    let bar = menus.into_iter().fold(
        Row::new()
            .spacing(spacing::XXS)
            .padding(spacing::XXS)
            .align_y(Vertical::Center),
        |row, menu| {
            let entry = button(Text::new(menu.label())).on_press(Message::Toggle(menu));
            row.push(if ctx.open == Some(menu) {
                entry.style(styles::button::selected)
            } else {
                entry.style(styles::button::menu_item)
            })
        },
    );

    let mut content = Column::new().width(Length::Fill).push(
        Container::new(bar)
            .width(Length::Fill)
            .style(styles::container::bar),
    );

    if let Some(menu) = ctx.open {
        content = content.push(dropdown(menu, ctx.recent));
    }

    content.into()
}

fn dropdown<'a>(menu: Menu, recent: &'a [String]) -> Element<'a, Message> {
    let entries = menu.entries().iter().fold(
        Column::new().spacing(spacing::XXS),
        |column, &action| {
            let column = column.push(
                button(Text::new(action.label()))
                    .width(Length::Fill)
                    .style(styles::button::menu_item)
                    .on_press(Message::Select(action)),
            );
            if action == Action::OpenUrl {
                recent_entries(column, recent)
            } else {
                column
            }
        },
    );

    Container::new(entries)
        .width(sizing::MENU_WIDTH)
        .padding(spacing::XS)
        .style(styles::container::menu)
        .into()
}

fn recent_entries<'a>(column: Column<'a, Message>, recent: &'a [String]) -> Column<'a, Message> {
    if recent.is_empty() {
        return column;
    }

    let column = column.push(Text::new("Open Recent").size(typography::CAPTION));
    recent.iter().fold(column, |column, entry| {
        column.push(
            button(Text::new(entry.as_str()))
                .width(Length::Fill)
                .style(styles::button::menu_item)
                .on_press(Message::OpenRecent(entry.clone())),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_same_menu_closes_it() {
        let mut open = None;
        update(Message::Toggle(Menu::File), &mut open);
        assert_eq!(open, Some(Menu::File));

        update(Message::Toggle(Menu::View), &mut open);
        assert_eq!(open, Some(Menu::View));

        update(Message::Toggle(Menu::View), &mut open);
        assert_eq!(open, None);
    }

    #[test]
    fn selecting_an_entry_closes_the_menu() {
        let mut open = Some(Menu::View);
        let event = update(Message::Select(Action::ToggleFullScreen), &mut open);
        assert_eq!(event, Some(Event::Action(Action::ToggleFullScreen)));
        assert_eq!(open, None);
    }

    #[test]
    fn recent_entry_closes_the_menu() {
        let mut open = Some(Menu::File);
        let event = update(
            Message::OpenRecent("https://example.org/a.ogg".to_string()),
            &mut open,
        );
        assert_eq!(
            event,
            Some(Event::OpenRecent("https://example.org/a.ogg".to_string()))
        );
        assert_eq!(open, None);
    }

    #[test]
    fn file_menu_offers_dvd_folder() {
        assert!(Menu::File.entries().contains(&Action::PlayDvdFolder));
        assert!(Menu::View.entries().contains(&Action::ControlBarAtTop));
    }
}
