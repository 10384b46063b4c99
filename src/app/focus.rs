use std::collections::BTreeMap;

use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Control {
    Down,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    Window,
    Control(Control),
}

/// Where a key press ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Window,
    Control(Control),
}

/// Explicit keyboard focus owner for the single window.
///
/// Controls have to be registered before they can ask for focus, and a
/// control registered as non-focusable never becomes the owner.
#[derive(Debug, Clone)]
pub struct Focus {
    owner: Owner,
    controls: BTreeMap<Control, bool>,
}

impl Focus {
    pub fn new() -> Self {
        Self {
            owner: Owner::Window,
            controls: BTreeMap::new(),
        }
    }

    pub fn register(&mut self, control: Control, focusable: bool) {
        self.controls.insert(control, focusable);
    }

    pub fn is_focusable(&self, control: Control) -> bool {
        self.controls.get(&control).copied().unwrap_or(false)
    }

    /// Returns whether `control` now owns focus.
    pub fn request(&mut self, control: Control) -> bool {
        if self.is_focusable(control) {
            self.owner = Owner::Control(control);
            true
        } else {
            trace!(?control, "refused focus request");
            false
        }
    }

    pub fn reassert_window(&mut self) {
        if let Owner::Control(control) = self.owner {
            trace!(?control, "window took focus back");
        }
        self.owner = Owner::Window;
    }

    pub fn owner(&self) -> Owner {
        self.owner
    }

    pub fn window_has_focus(&self) -> bool {
        self.owner == Owner::Window
    }

    pub fn deliver_key(&self) -> Delivery {
        match self.owner {
            Owner::Window => Delivery::Window,
            Owner::Control(control) => Delivery::Control(control),
        }
    }
}
