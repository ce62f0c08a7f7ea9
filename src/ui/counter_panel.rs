use iced::alignment::Horizontal;
use iced::widget::{button, column, container, row, text};
use iced::{Element, Length};

use crate::Message;
use super::style;

pub fn view<'a>(count: u32, milestone: Option<u32>) -> Element<'a, Message> {
    let tap_button = button(text("Tap Me").size(16))
        .on_press(Message::TapPressed)
        .padding([12, 60])
        .style(style::primary_button);

    let mut content = column![
        text("Demobench").size(32),
        text("A desktop demonstration application")
            .size(15)
            .color(style::TEXT_MUTED),
        text(format!("Taps: {count}")).size(24),
        tap_button,
    ]
    .spacing(18)
    .align_x(Horizontal::Center);

    if let Some(milestone) = milestone {
        let banner = container(
            column![
                text("Milestone!").size(16),
                text(format!("You've tapped {milestone} times!"))
                    .size(13)
                    .color(style::TEXT_MUTED),
                row![
                    button(text("Cool!").size(13))
                        .on_press(Message::MilestoneDismissed)
                        .padding([6, 16])
                        .style(style::subtle_button),
                    button(text("Reset").size(13))
                        .on_press(Message::CounterReset)
                        .padding([6, 16])
                        .style(style::danger_button),
                ]
                .spacing(10),
            ]
            .spacing(10)
            .align_x(Horizontal::Center),
        )
        .padding(16)
        .style(|_| style::surface_style(style::SURFACE_1, 10.0));

        content = content.push(banner);
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
