use iced::widget::{Text, text, text::IntoFragment};

use crate::app::widgets::{fonts, sizes};

pub fn l<'a>(content: impl IntoFragment<'a>) -> Text<'a> {
    text(content).size(sizes::l())
}

pub fn xl<'a>(content: impl IntoFragment<'a>) -> Text<'a> {
    text(content).size(sizes::xl()).font(fonts::monospace())
}
