use iced::widget::{button, column, container, scrollable, text};
use iced::{Element, Length};

use crate::Message;
use super::style;

pub fn view<'a>(report: &'a str) -> Element<'a, Message> {
    let report_view = scrollable(
        container(text(report).size(13))
            .width(Length::Fill)
            .padding(12)
            .style(|_| style::surface_style(style::SURFACE_1, 8.0)),
    )
    .height(Length::Fill);

    let refresh_button = button(text("Refresh").size(14))
        .on_press(Message::DiagnosticsRefreshed)
        .padding([10, 24])
        .style(style::primary_button);

    column![report_view, container(refresh_button).center_x(Length::Fill)]
        .spacing(12)
        .padding(16)
        .height(Length::Fill)
        .into()
}
