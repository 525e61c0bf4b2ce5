use futures_signals::signal::{Mutable, Signal};

use crate::event::{self, Handler};

/// Whether a dropdown's menu is open.
///
/// Clones share the same state.
#[derive(Clone, Default)]
pub struct DropdownState {
    open: Mutable<bool>,
}

impl DropdownState {
    /// A closed dropdown.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn signal(&self) -> impl Signal<Item = bool> {
        self.open.signal()
    }

    pub fn toggle(&self) {
        self.open.replace_with(|open| !*open);
    }

    pub fn close(&self) {
        self.open.set_neq(false);
    }

    /// The trigger control was activated.
    ///
    /// `on_click` is always called. The container can't be disabled.
    pub fn trigger_click<E>(&self, event: &E, on_click: Option<&Handler<E>>) {
        self.toggle();
        event::call(on_click, event);
    }

    /// Somewhere inside the menu list was clicked.
    pub fn menu_click(&self, close_on_menu_click: bool) {
        if close_on_menu_click {
            self.close();
        }
    }

    pub fn scrim_click(&self) {
        self.close();
    }
}
