use tracing::debug;

use crate::{
    app::{
        controls::Input,
        display,
        focus::{Control, Delivery, Focus},
    },
    volume::Volume,
};

/// Volume state plus the focus policy around it, independent of the GUI
/// runtime. Every handler mutates and then renders.
#[derive(Debug, Clone)]
pub struct ViewController {
    volume: Volume,
    focus: Focus,
    label: String,
}

impl ViewController {
    pub fn new(max: u8) -> Self {
        let mut focus = Focus::new();
        focus.register(Control::Down, false);
        focus.register(Control::Up, false);

        let mut controller = Self {
            volume: Volume::new(max),
            focus,
            label: String::new(),
        };
        controller.render();
        controller
    }

    pub fn volume(&self) -> &Volume {
        &self.volume
    }

    pub fn focus(&self) -> &Focus {
        &self.focus
    }

    /// Direct access for runtime actions that move focus outside a handler,
    /// such as a layout change.
    pub fn focus_mut(&mut self) -> &mut Focus {
        &mut self.focus
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns where the input landed. Pointer activations always land on the
    /// clicked control; key presses go to whoever owns focus.
    pub fn handle(&mut self, input: Input) -> Delivery {
        match input {
            Input::UpClicked => self.click(Control::Up),
            Input::DownClicked => self.click(Control::Down),
            Input::UpPressed | Input::DownPressed | Input::OtherKey => self.key_pressed(input),
        }
    }

    /// Activation from the pointer. The runtime offers focus to whatever was
    /// clicked before the handler runs.
    pub fn click(&mut self, control: Control) -> Delivery {
        self.focus.request(control);

        match control {
            Control::Up => self.volume.increase(),
            Control::Down => self.volume.decrease(),
        }
        debug!(?control, volume = self.volume.level(), "button activated");
        self.render();

        Delivery::Control(control)
    }

    pub fn key_pressed(&mut self, input: Input) -> Delivery {
        let delivery = self.focus.deliver_key();
        if let Delivery::Control(control) = delivery {
            debug!(?control, ?input, "key went to a focused control");
            self.render();
            return delivery;
        }

        match input {
            Input::UpPressed => self.volume.increase(),
            Input::DownPressed => self.volume.decrease(),
            Input::OtherKey | Input::UpClicked | Input::DownClicked => {}
        }
        debug!(?input, volume = self.volume.level(), "key pressed");
        self.render();

        delivery
    }

    /// Rebuilds the label and hands keyboard focus back to the window.
    pub fn render(&mut self) {
        self.label = display::label(&self.volume);
        self.focus.reassert_window();
    }
}
