use iced::Element;
use iced::widget::{column, text, text_editor};

use crate::Message;

use super::style;

pub fn view<'a>(editor: &'a text_editor::Content) -> Element<'a, Message> {
    column![
        text("Body (JSON / text)").size(13),
        text_editor(editor)
            .on_action(Message::BodyEdited)
            .style(style::editor_style)
            .height(110),
    ]
    .spacing(6)
    .into()
}
