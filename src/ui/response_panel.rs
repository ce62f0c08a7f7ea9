use iced::widget::{column, container, scrollable, text};
use iced::{Element, Length};

use crate::Message;
use crate::http::render::RenderedExchange;

use super::style;

/// Single display buffer for the latest exchange; each result overwrites
/// the previous one.
pub fn view<'a>(rendered: Option<&'a RenderedExchange>, in_flight: bool) -> Element<'a, Message> {
    let content: Element<'a, Message> = if in_flight {
        text("Sending request...")
            .size(13)
            .color(style::TEXT_MUTED)
            .into()
    } else if let Some(rendered) = rendered {
        text(&rendered.text)
            .size(13)
            .color(style::tone_color(rendered.tone))
            .into()
    } else {
        text("Response will appear here...")
            .size(13)
            .color(style::TEXT_MUTED)
            .into()
    };

    column![
        text("Response").size(13),
        scrollable(
            container(content)
                .width(Length::Fill)
                .padding(10)
                .style(|_| style::surface_style(style::SURFACE_1, 8.0)),
        )
        .height(Length::Fill),
    ]
    .spacing(6)
    .height(Length::Fill)
    .into()
}
