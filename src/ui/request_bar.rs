use iced::widget::{button, pick_list, row, text, text_input};
use iced::{Element, Length};

use crate::Message;
use crate::http::method::HttpMethod;

use super::style;

pub fn view<'a>(method: HttpMethod, url: &str, in_flight: bool) -> Element<'a, Message> {
    let method_picklist = pick_list(&HttpMethod::ALL[..], Some(method), Message::MethodSelected)
        .style(style::pick_list_style)
        .padding(10)
        .width(110);

    let url_input = text_input("https://api.example.com", url)
        .on_input(Message::UrlChanged)
        .on_submit(Message::SendPressed)
        .style(style::input_style)
        .padding(10)
        .size(15)
        .width(Length::Fill);

    // The trigger is disabled for the whole in-flight window; a second
    // exchange cannot start before the first resolves.
    let send_button = if in_flight {
        button(text("Sending...").size(14))
            .padding([10, 18])
            .style(style::send_button)
    } else {
        button(text("Send").size(14))
            .on_press(Message::SendPressed)
            .padding([10, 18])
            .style(style::send_button)
    };

    row![method_picklist, url_input, send_button].spacing(10).into()
}
