// SPDX-License-Identifier: MPL-2.0
//! Main window layout.
//!
//! Bars are laid out according to the controller's [`ChromeState`]; the
//! control bar docks to the configured edge.

use super::Message;
use crate::media::Deck;
use crate::shell::{ChromeState, DisplayController, TabId, ToolBarArea};
use crate::ui::design_tokens::spacing;
use crate::ui::menu_bar::{self, Menu};
use crate::ui::{control_bar, navbar, styles, tabs};
use iced::alignment::Vertical;
use iced::widget::{button, mouse_area, text_input, Column, Container, Row, Stack, Text};
use iced::{mouse, Element, Length};

/// Contextual data needed to render the main window.
pub struct ViewContext<'a> {
    pub controller: &'a DisplayController,
    pub deck: &'a Deck,
    pub open_menu: Option<Menu>,
    pub url_input: Option<&'a str>,
    pub notice: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let controller = ctx.controller;
    let chrome = controller.chrome();

    let content = tabs::view(tabs::ViewContext {
        tab: controller.visible_tab(),
        surface_owner: controller.surface_owner(),
        deck: ctx.deck,
    })
    .map(Message::Tab);

    let mut main = Row::new().width(Length::Fill).height(Length::Fill);
    if chrome.navigation_bar_visible {
        main = main.push(
            navbar::view(navbar::ViewContext {
                tabs: controller.tabs(),
                current: controller.current_tab(),
            })
            .map(Message::Navbar),
        );
    }
    main = main.push(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let mut column = Column::new().width(Length::Fill).height(Length::Fill);
    if chrome.menu_bar_visible {
        column = column.push(
            menu_bar::view(menu_bar::ViewContext {
                open: ctx.open_menu,
                television: controller.tabs().contains(TabId::Television),
                recent: ctx.deck.recent_urls(),
            })
            .map(Message::MenuBar),
        );
    }
    if let Some(input) = ctx.url_input {
        column = column.push(url_prompt(input));
    }
    if let Some(notice) = ctx.notice {
        column = column.push(notice_banner(notice));
    }

    let body: Element<'_, Message> = if chrome.control_bar_visible {
        let bar = control_bar_view(controller, ctx.deck);
        let area = controller.control_bar_area();
        if controller.is_auto_hiding() {
            Stack::new()
                .push(main)
                .push(docked_overlay(bar, area))
                .into()
        } else {
            match area {
                ToolBarArea::Top => Column::new().push(bar).push(main).into(),
                ToolBarArea::Bottom => Column::new().push(main).push(bar).into(),
            }
        }
    } else {
        main.into()
    };
    column = column.push(body);

    mouse_area(column)
        .interaction(cursor_interaction(chrome))
        .into()
}

fn cursor_interaction(chrome: ChromeState) -> mouse::Interaction {
    if chrome.cursor_hidden {
        mouse::Interaction::Hidden
    } else {
        mouse::Interaction::default()
    }
}

/// Floats the control bar over the content along its docked edge.
fn docked_overlay(bar: Element<'_, Message>, area: ToolBarArea) -> Element<'_, Message> {
    let edge = match area {
        ToolBarArea::Top => Vertical::Top,
        ToolBarArea::Bottom => Vertical::Bottom,
    };
    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(edge)
        .into()
}

fn control_bar_view<'a>(controller: &DisplayController, deck: &Deck) -> Element<'a, Message> {
    let session = deck.session();
    control_bar::view(control_bar::ViewContext {
        caption: session.caption(),
        has_media: session.current().is_some(),
        paused: session.is_paused(),
        mode: controller.display_mode(),
    })
    .map(Message::ControlBar)
}

fn url_prompt(input: &str) -> Element<'_, Message> {
    let row = Row::new()
        .spacing(spacing::XS)
        .padding(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new("URL"))
        .push(
            text_input("https://", input)
                .on_input(Message::UrlInputChanged)
                .on_submit(Message::UrlInputSubmitted)
                .width(Length::Fill),
        )
        .push(button(Text::new("Open")).on_press(Message::UrlInputSubmitted))
        .push(button(Text::new("Cancel")).on_press(Message::UrlInputCancelled));

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::bar)
        .into()
}

fn notice_banner(notice: &str) -> Element<'_, Message> {
    let row = Row::new()
        .spacing(spacing::XS)
        .padding(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(notice).width(Length::Fill))
        .push(button(Text::new("Dismiss")).on_press(Message::DismissNotice));

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}
