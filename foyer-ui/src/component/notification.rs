use crate::{component::text, theme, widget::*};
use iced::Length;

pub fn success<'a, T: 'a>(message: &str) -> Container<'a, T> {
    Container::new(text::p1_medium(message.to_owned()))
        .padding(15)
        .style(theme::notification::success)
        .width(Length::Fill)
}

pub fn failure<'a, T: 'a>(message: &str) -> Container<'a, T> {
    Container::new(text::p1_medium(message.to_owned()))
        .padding(15)
        .style(theme::notification::error)
        .width(Length::Fill)
}
