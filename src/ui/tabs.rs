// SPDX-License-Identifier: MPL-2.0
//! Content of the main region, one view per tab.
//!
//! Only the tab owning the surface lease draws the rendering surface; the
//! others show a placeholder where it would go.

use crate::media::{Deck, DiscKind};
use crate::shell::TabId;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub tab: TabId,
    pub surface_owner: TabId,
    pub deck: &'a Deck,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    OpenFile,
    OpenRecent(String),
    PlayDisc(DiscKind),
    PlayEntry(usize),
    PlayLastChannel,
    ToggleRecording,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    match ctx.tab {
        TabId::Start => start(ctx.deck),
        TabId::Player => surface(&ctx),
        TabId::Playlist => Row::new()
            .push(playlist(ctx.deck))
            .push(surface(&ctx))
            .into(),
        TabId::Television => Column::new()
            .push(television(ctx.deck))
            .push(surface(&ctx))
            .into(),
    }
}

fn start<'a>(deck: &'a Deck) -> Element<'a, Message> {
    let actions = Row::new()
        .spacing(spacing::SM)
        .push(button(Text::new("Open File")).on_press(Message::OpenFile))
        .push(button(Text::new("Play Audio CD")).on_press(Message::PlayDisc(DiscKind::AudioCd)))
        .push(button(Text::new("Play Video CD")).on_press(Message::PlayDisc(DiscKind::VideoCd)))
        .push(button(Text::new("Play DVD")).on_press(Message::PlayDisc(DiscKind::Dvd)));

    let mut recent = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new("Recently opened").size(typography::TITLE_MD));
    if deck.recent_urls().is_empty() {
        recent = recent.push(Text::new("Nothing opened yet").size(typography::CAPTION));
    }
    for url in deck.recent_urls() {
        recent = recent.push(
            button(Text::new(url.as_str()).size(typography::BODY))
                .style(styles::button::menu_item)
                .on_press(Message::OpenRecent(url.clone())),
        );
    }

    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .push(actions)
            .push(scrollable(recent)),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn playlist<'a>(deck: &'a Deck) -> Element<'a, Message> {
    let current = deck.playlist().current_index();
    let entries = deck.playlist().entries().iter().enumerate().fold(
        Column::new().spacing(spacing::XXS),
        |column, (index, url)| {
            let label = Text::new(url.as_str()).size(typography::BODY);
            let entry = button(label)
                .width(Length::Fill)
                .on_press(Message::PlayEntry(index));
            column.push(if current == Some(index) {
                entry.style(styles::button::selected)
            } else {
                entry.style(styles::button::menu_item)
            })
        },
    );

    Container::new(scrollable(entries))
        .padding(spacing::XS)
        .width(Length::FillPortion(1))
        .height(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn television<'a>(deck: &'a Deck) -> Element<'a, Message> {
    let tv = deck.television();
    let channel = tv.current_channel().unwrap_or("No channel");

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(channel).size(typography::TITLE_MD))
        .push(button(Text::new("Last Channel")).on_press(Message::PlayLastChannel))
        .push(
            button(Text::new(if tv.is_recording() {
                "Stop Recording"
            } else {
                "Record"
            }))
            .on_press(Message::ToggleRecording),
        );
    if tv.is_recording() {
        row = row.push(Text::new("REC").color(palette::ERROR_500));
    }

    Container::new(row).width(Length::Fill).into()
}

fn surface<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    if ctx.surface_owner != ctx.tab {
        return Container::new(Text::new("Playback is shown in another tab"))
            .width(Length::FillPortion(2))
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::panel)
            .into();
    }

    let caption = ctx
        .deck
        .session()
        .caption()
        .unwrap_or_else(|| String::from("No media"));

    Container::new(Text::new(caption).size(typography::TITLE_MD))
        .width(Length::FillPortion(2))
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::surface)
        .into()
}
