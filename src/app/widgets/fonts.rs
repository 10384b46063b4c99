use iced::Font;

pub fn monospace() -> Font {
    Font::MONOSPACE
}
