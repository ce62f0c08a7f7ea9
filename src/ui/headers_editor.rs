use iced::Element;
use iced::widget::{column, text, text_editor};

use crate::Message;

use super::style;

pub fn view<'a>(editor: &'a text_editor::Content) -> Element<'a, Message> {
    column![
        text("Headers (JSON)").size(13),
        text_editor(editor)
            .on_action(Message::HeadersEdited)
            .style(style::editor_style)
            .height(110),
    ]
    .spacing(6)
    .into()
}
