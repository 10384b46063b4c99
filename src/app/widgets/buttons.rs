use iced::{
    Length::Fill,
    widget::{Button, button, text},
};

use crate::app::{Message, controls::Input, widgets::sizes};

/// Buttons that activate on click only; the window keeps the keyboard.
pub fn volume<'a>(label: &'a str, input: Input) -> Button<'a, Message> {
    button(text(label).size(sizes::m()).center())
        .width(Fill)
        .padding(sizes::s())
        .on_press(Message::Input(input))
}
