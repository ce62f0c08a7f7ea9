use iced::alignment::Alignment;
use iced::widget::{button, container, horizontal_space, row, text};
use iced::{Element, Length};

use crate::{Message, Screen};

use super::style;

pub fn view<'a>(active: Screen) -> Element<'a, Message> {
    let mut tabs = row![].spacing(0);
    for screen in Screen::ALL {
        tabs = tabs.push(tab_button(screen, active));
    }

    container(
        row![
            text("Demobench").size(16),
            text(format!("v{}", env!("CARGO_PKG_VERSION")))
                .size(10)
                .color(style::TEXT_MUTED),
            horizontal_space(),
            tabs
        ]
        .spacing(8)
        .padding([5, 12])
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .style(|_| style::surface_style(style::SURFACE_1, 0.0))
    .into()
}

fn tab_button<'a>(screen: Screen, active: Screen) -> iced::widget::Button<'a, Message> {
    let is_active = screen == active;
    button(text(screen.to_string()).size(12))
        .on_press(Message::ScreenSelected(screen))
        .padding([8, 14])
        .style(move |theme, status| style::tab_button(is_active, theme, status))
}
