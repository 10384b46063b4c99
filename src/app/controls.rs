use iced::{
    Event, event,
    keyboard::{self, Key, key},
};

use crate::app;

/// Every input the window reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    UpPressed,
    DownPressed,
    OtherKey,
    UpClicked,
    DownClicked,
}

pub fn event_handler(
    event: Event,
    _status: event::Status,
    _window: iced::window::Id,
) -> Option<app::Message> {
    map_event(&event).map(app::Message::Input)
}

pub fn map_event(event: &Event) -> Option<Input> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => Some(map_key(key.as_ref())),
        // Releases and modifier changes carry nothing for the volume.
        _ => None,
    }
}

pub fn map_key(key: Key<&str>) -> Input {
    match key {
        Key::Named(key::Named::ArrowUp) => Input::UpPressed,
        Key::Named(key::Named::ArrowDown) => Input::DownPressed,
        _ => Input::OtherKey,
    }
}
