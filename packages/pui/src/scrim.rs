use silkenweb::{
    elements::html::div,
    node::Node,
    prelude::{Element, ElementEvents},
};

use crate::{css, event::Notify};

/// Renders a full coverage overlay that captures clicks outside an open menu.
pub trait Scrim {
    /// `dismiss` must be called when the overlay is clicked.
    fn render(&self, dismiss: Notify) -> Node;
}

/// A transparent, fixed position `div`.
#[derive(Copy, Clone, Default)]
pub struct Overlay;

impl Scrim for Overlay {
    fn render(&self, dismiss: Notify) -> Node {
        div()
            .class(css::SCRIM)
            .on_click(move |_, _| dismiss())
            .into()
    }
}

/// `true` if a blocking scrim should currently be rendered.
pub fn is_visible(blocking: bool, disabled: bool, open: bool) -> bool {
    blocking && open && !disabled
}
