//! Activation events and the handlers that observe them.
//!
//! Click dispatch is written against [`Activation`] rather than a concrete DOM
//! event, so the same logic drives `web_sys::MouseEvent`s in the browser and
//! recorded events in tests.
use std::rc::Rc;

/// An event that activates a control, such as a click.
pub trait Activation {
    /// Suppress the browser's default action, such as following a link.
    fn prevent_default(&self);
}

impl Activation for web_sys::MouseEvent {
    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self)
    }
}

/// Observes an activation event.
pub type Handler<E> = Rc<dyn Fn(&E)>;

/// Observes the selection of a dropdown item, along with its event key.
pub type SelectHandler<E> = Rc<dyn Fn(&E, Option<&str>)>;

/// Observes the end of a transition.
pub type Notify = Rc<dyn Fn()>;

pub(crate) fn call<E>(handler: Option<&Handler<E>>, event: &E) {
    if let Some(handler) = handler {
        handler(event)
    }
}
