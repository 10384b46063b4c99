use iced::{
    Alignment::Center,
    Element,
    Length::Fill,
    Subscription, Task, Theme, event,
    widget::{column, container, row},
    window,
};
use tracing::debug;

use crate::config::Config;
use controls::Input;
use controller::ViewController;
use widgets::{
    buttons,
    sizes::{l, m, xl},
    text,
};

pub mod controller;
pub mod controls;
pub mod display;
pub mod focus;
mod widgets;

const WINDOW_SIZE: (f32, f32) = (420.0, 220.0);

pub fn run(config: Config) -> iced::Result {
    iced::application(move || App::new(config), App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size(WINDOW_SIZE)
        .resizable(false)
        .run()
}

struct App {
    controller: ViewController,
}

#[derive(Debug, Clone)]
pub enum Message {
    Input(Input),
}

impl App {
    fn new(config: Config) -> (Self, Task<Message>) {
        (
            Self {
                controller: ViewController::new(config.max),
            },
            focus_window(),
        )
    }

    fn title(&self) -> String {
        "Volume".into()
    }

    fn theme(&self) -> Theme {
        Theme::CatppuccinMocha
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Input(input) => {
                let delivery = self.controller.handle(input);
                debug!(?input, ?delivery, "input handled");
            }
        }

        focus_window()
    }

    fn view(&self) -> Element<'_, Message> {
        container(
            column![
                text::l(display::INSTRUCTIONS),
                text::xl(self.controller.label()),
                row![
                    buttons::volume("Down", Input::DownClicked),
                    buttons::volume("Up", Input::UpClicked),
                ]
                .spacing(m()),
            ]
            .spacing(l())
            .align_x(Center),
        )
        .padding(xl())
        .center(Fill)
        .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(controls::event_handler)
    }
}

/// The runtime may move OS focus while handling a click, so ask for it back
/// after every render.
fn focus_window() -> Task<Message> {
    window::latest().and_then(window::gain_focus)
}
