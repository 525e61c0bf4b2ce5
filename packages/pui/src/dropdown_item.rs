//! Rows for a dropdown menu.
//!
//! A row is a header, a divider or an actionable item, in that order of
//! precedence. Only actionable items respond to clicks.
use std::{mem, rc::Rc};

use derive_more::Into;
use silkenweb::{
    clone,
    elements::{
        html::{a, li},
        AriaElement,
    },
    node::Node,
    prelude::{Element, ElementEvents, ParentElement},
    Value,
};
use web_sys::MouseEvent;

use crate::{
    attributes::{parse_bool, Attributes},
    content::Content,
    css,
    dropdown::has_href,
    event::{self, Activation, Handler, SelectHandler},
    Result,
};

/// Property names understood by [`DropdownItemProps::from_props`].
///
/// Anything else is forwarded to the row's link.
pub const RECOGNIZED_PROPS: &[&str] = &[
    "children",
    "className",
    "disabled",
    "divider",
    "eventKey",
    "header",
    "href",
    "onClick",
    "onSelect",
    "style",
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Header,
    Divider,
    Item,
}

pub struct DropdownItemProps<E = MouseEvent> {
    pub header: bool,
    pub divider: bool,
    pub disabled: bool,
    pub href: Option<String>,
    pub event_key: Option<String>,
    pub class_name: Option<String>,
    pub style: Option<String>,
    pub on_click: Option<Handler<E>>,
    pub on_select: Option<SelectHandler<E>>,
    /// Attributes for the link, when there's an `href`.
    pub attributes: Attributes,
}

impl<E> Default for DropdownItemProps<E> {
    fn default() -> Self {
        Self {
            header: false,
            divider: false,
            disabled: false,
            href: None,
            event_key: None,
            class_name: None,
            style: None,
            on_click: None,
            on_select: None,
            attributes: Attributes::new(),
        }
    }
}

impl<E> DropdownItemProps<E> {
    /// Build properties from string key/value pairs.
    ///
    /// Keys use the camel case names in [`RECOGNIZED_PROPS`]. Callbacks and
    /// `children` are dropped. Unrecognized keys end up in
    /// [`Self::attributes`].
    pub fn from_props<K, V>(props: impl IntoIterator<Item = (K, V)>) -> Result<Self>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let props: Vec<(String, String)> = props
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        let mut item = Self::default();

        for (key, value) in &props {
            match key.as_str() {
                "header" => item.header = parse_bool(key, value)?,
                "divider" => item.divider = parse_bool(key, value)?,
                "disabled" => item.disabled = parse_bool(key, value)?,
                "href" => item.href = Some(value.clone()),
                "eventKey" => item.event_key = Some(value.clone()),
                "className" => item.class_name = Some(value.clone()),
                "style" => item.style = Some(value.clone()),
                _ => (),
            }
        }

        item.attributes = Attributes::residual(props, RECOGNIZED_PROPS);

        Ok(item)
    }

    pub fn header(mut self) -> Self {
        self.header = true;
        self
    }

    pub fn divider(mut self) -> Self {
        self.divider = true;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn event_key(mut self, event_key: impl Into<String>) -> Self {
        self.event_key = Some(event_key.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn on_click(mut self, handler: impl Fn(&E) + 'static) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    pub fn on_select(mut self, handler: impl Fn(&E, Option<&str>) + 'static) -> Self {
        self.on_select = Some(Rc::new(handler));
        self
    }

    pub fn mode(&self) -> Mode {
        if self.header {
            Mode::Header
        } else if self.divider {
            Mode::Divider
        } else {
            Mode::Item
        }
    }

    /// Classes for an actionable row.
    pub fn classes(&self) -> Vec<String> {
        self.class_name
            .iter()
            .cloned()
            .chain(self.disabled.then(|| css::DISABLED.to_owned()))
            .collect()
    }

    /// A row was activated.
    ///
    /// Headers, dividers and disabled rows ignore the click completely. The
    /// default action isn't prevented either, so a disabled link is still
    /// followed.
    pub fn click(&self, event: &E)
    where
        E: Activation,
    {
        if self.disabled || self.mode() != Mode::Item {
            return;
        }

        if !has_href(self.href.as_deref()) {
            event.prevent_default();
        }

        if let Some(on_select) = &self.on_select {
            on_select(event, self.event_key.as_deref());
        }

        event::call(self.on_click.as_ref(), event);
    }
}

#[derive(Into, Value)]
pub struct DropdownItem(Node);

impl DropdownItem {
    pub fn new(props: DropdownItemProps, content: impl Into<Content>) -> Self {
        css::ensure_mounted();

        let content = content.into();

        Self(match props.mode() {
            Mode::Header => content
                .fill(li().role("heading").class(css::DROPDOWN_HEADER))
                .into(),
            Mode::Divider => li().role("separator").class(css::DIVIDER).into(),
            Mode::Item => item(props, content),
        })
    }
}

fn item(mut props: DropdownItemProps, content: Content) -> Node {
    let attributes = mem::take(&mut props.attributes);
    let href = props.href.clone();
    let props = Rc::new(props);

    let mut row = li().classes(props.classes()).on_click({
        clone!(props);
        move |ev, _| props.click(&ev)
    });

    if let Some(style) = &props.style {
        row = row.attribute("style", style.clone());
    }

    match href {
        Some(href) => {
            let mut link = a().href(href);

            if props.disabled {
                link = link.attribute("disabled", "");
            }

            row.child(content.fill(attributes.apply(link)))
        }
        None => content.fill(row),
    }
    .into()
}
