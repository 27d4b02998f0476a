// SPDX-License-Identifier: MPL-2.0
//! Navigation bar listing the tabs in their configured order.

use crate::shell::{TabId, TabSet};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{Element, Length, Theme};

/// Contextual data needed to render the navigation bar.
pub struct ViewContext<'a> {
    pub tabs: &'a TabSet,
    /// Tab highlighted as the current selection.
    pub current: TabId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Select(TabId),
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let column = ctx.tabs.iter().fold(
        Column::new().spacing(spacing::XXS).padding(spacing::XS),
        |column, tab| {
            let style: fn(&Theme, button::Status) -> button::Style = if tab == ctx.current {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            column.push(
                button(Text::new(tab.label()))
                    .width(Length::Fill)
                    .height(sizing::BUTTON_HEIGHT)
                    .style(style)
                    .on_press(Message::Select(tab)),
            )
        },
    );

    Container::new(column)
        .width(sizing::NAVIGATION_BAR_WIDTH)
        .height(Length::Fill)
        .style(styles::container::bar)
        .into()
}
