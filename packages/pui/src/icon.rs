use silkenweb::{elements::html::i, node::Node, prelude::Element};

/// The down chevron, used for the dropdown toggle.
pub const CHEVRON_DOWN: &str = "chevron_down";

/// Maps an icon name to rendered glyph markup.
pub trait IconRenderer {
    fn render(&self, name: &str, class: &str) -> Node;
}

/// Renders icons from an icon font, as `<i class="{class} icon-{name}">`.
#[derive(Copy, Clone, Default)]
pub struct GlyphIcon;

impl IconRenderer for GlyphIcon {
    fn render(&self, name: &str, class: &str) -> Node {
        i().classes([class.to_owned(), glyph_class(name)])
            .attribute("aria-hidden", "true")
            .into()
    }
}

fn glyph_class(name: &str) -> String {
    format!("icon-{}", name.replace('_', "-"))
}
