//! The dropdown menu container.
//!
//! A [`Dropdown`] renders a trigger button, the toggle glyph, an optional
//! split action link, an optional blocking scrim and the menu panel. It owns
//! one piece of state: whether the menu is open.
use std::{future::Future, mem, rc::Rc};

use derive_more::Into;
use futures_signals::signal::{Signal, SignalExt};
use silkenweb::{
    clone,
    elements::{
        html::{a, button, div, ul, Div},
        AriaElement,
    },
    node::Node,
    prelude::{Element, ElementEvents, ParentElement},
    value::Sig,
    Value,
};
use web_sys::MouseEvent;

use crate::{
    attributes::{parse_bool, Attributes},
    content::{self, Content},
    css,
    event::{self, Activation, Handler, Notify},
    icon::{self, GlyphIcon, IconRenderer},
    scrim::{self, Overlay, Scrim},
    transition::{Immediate, Phase, Transition, TransitionTracker},
    Error, Result,
};

mod appearance;
mod state;

pub use appearance::{Appearance, MenuAlign, Size};
pub use state::DropdownState;

/// Property names understood by [`DropdownProps::from_props`].
///
/// Anything else is forwarded as an attribute.
pub const RECOGNIZED_PROPS: &[&str] = &[
    "blockingScrim",
    "border",
    "buttonAriaLabel",
    "buttonClassName",
    "children",
    "className",
    "closeOnMenuClick",
    "disableScrim",
    "disabled",
    "flat",
    "floatMenu",
    "href",
    "icon",
    "labelAriaLabel",
    "link",
    "menuAlign",
    "onClick",
    "onEntered",
    "onExited",
    "onSelect",
    "onSplitClick",
    "scroll",
    "showIcon",
    "size",
    "split",
    "splitClassName",
    "title",
    "toggle",
];

pub struct DropdownProps<E = MouseEvent> {
    pub blocking_scrim: bool,
    pub border: bool,
    /// Close the menu when anything inside it is clicked. Defaults to `true`.
    pub close_on_menu_click: bool,
    pub disable_scrim: bool,
    /// Disables the split action link. The trigger is unaffected.
    pub disabled: bool,
    pub flat: bool,
    pub float_menu: bool,
    pub link: bool,
    pub scroll: bool,
    /// Defaults to `true`.
    pub show_icon: bool,
    pub split: bool,
    pub menu_align: MenuAlign,
    pub size: Size,
    pub title: Option<Content>,
    /// The toggle glyph's icon name. Defaults to [`icon::CHEVRON_DOWN`].
    pub icon: String,
    /// Replaces the default toggle glyph.
    pub toggle: Option<Node>,
    pub href: Option<String>,
    pub button_aria_label: Option<String>,
    pub label_aria_label: Option<String>,
    pub button_class_name: Option<String>,
    pub split_class_name: Option<String>,
    pub class_name: Option<String>,
    pub on_click: Option<Handler<E>>,
    pub on_split_click: Option<Handler<E>>,
    pub on_select: Option<Handler<E>>,
    pub on_entered: Option<Notify>,
    pub on_exited: Option<Notify>,
    pub attributes: Attributes,
}

impl<E> Default for DropdownProps<E> {
    fn default() -> Self {
        Self {
            blocking_scrim: false,
            border: false,
            close_on_menu_click: true,
            disable_scrim: false,
            disabled: false,
            flat: false,
            float_menu: false,
            link: false,
            scroll: false,
            show_icon: true,
            split: false,
            menu_align: MenuAlign::None,
            size: Size::Normal,
            title: None,
            icon: icon::CHEVRON_DOWN.to_owned(),
            toggle: None,
            href: None,
            button_aria_label: None,
            label_aria_label: None,
            button_class_name: None,
            split_class_name: None,
            class_name: None,
            on_click: None,
            on_split_click: None,
            on_select: None,
            on_entered: None,
            on_exited: None,
            attributes: Attributes::new(),
        }
    }
}

impl<E> DropdownProps<E> {
    /// Build properties from string key/value pairs.
    ///
    /// Keys use the camel case names in [`RECOGNIZED_PROPS`]. Callbacks,
    /// `toggle` and `children` can't be expressed as strings, so they're
    /// dropped. Unrecognized keys end up in [`Self::attributes`].
    pub fn from_props<K, V>(props: impl IntoIterator<Item = (K, V)>) -> Result<Self>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let props: Vec<(String, String)> = props
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        let mut dropdown = Self::default();

        for (key, value) in &props {
            let flag = || parse_bool(key, value);

            match key.as_str() {
                "blockingScrim" => dropdown.blocking_scrim = flag()?,
                "border" => dropdown.border = flag()?,
                "closeOnMenuClick" => dropdown.close_on_menu_click = flag()?,
                "disableScrim" => dropdown.disable_scrim = flag()?,
                "disabled" => dropdown.disabled = flag()?,
                "flat" => dropdown.flat = flag()?,
                "floatMenu" => dropdown.float_menu = flag()?,
                "link" => dropdown.link = flag()?,
                "scroll" => dropdown.scroll = flag()?,
                "showIcon" => dropdown.show_icon = flag()?,
                "split" => dropdown.split = flag()?,
                "menuAlign" => {
                    dropdown.menu_align = value
                        .parse()
                        .map_err(|_| Error::InvalidMenuAlign(value.clone()))?
                }
                "size" => {
                    dropdown.size = value
                        .parse()
                        .map_err(|_| Error::InvalidSize(value.clone()))?
                }
                "title" => dropdown.title = Some(value.as_str().into()),
                "icon" => dropdown.icon = value.clone(),
                "href" => dropdown.href = Some(value.clone()),
                "buttonAriaLabel" => dropdown.button_aria_label = Some(value.clone()),
                "labelAriaLabel" => dropdown.label_aria_label = Some(value.clone()),
                "buttonClassName" => dropdown.button_class_name = Some(value.clone()),
                "splitClassName" => dropdown.split_class_name = Some(value.clone()),
                "className" => dropdown.class_name = Some(value.clone()),
                _ => (),
            }
        }

        dropdown.attributes = Attributes::residual(props, RECOGNIZED_PROPS);

        Ok(dropdown)
    }

    pub fn on_click(mut self, handler: impl Fn(&E) + 'static) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    pub fn on_split_click(mut self, handler: impl Fn(&E) + 'static) -> Self {
        self.on_split_click = Some(Rc::new(handler));
        self
    }

    pub fn on_select(mut self, handler: impl Fn(&E) + 'static) -> Self {
        self.on_select = Some(Rc::new(handler));
        self
    }

    pub fn on_entered(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_entered = Some(Rc::new(handler));
        self
    }

    pub fn on_exited(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_exited = Some(Rc::new(handler));
        self
    }

    pub fn has_title(&self) -> bool {
        content::is_present(self.title.as_ref())
    }

    pub fn appearance(&self) -> Appearance {
        Appearance {
            border: self.border,
            flat: self.flat,
            float_menu: self.float_menu,
            link: self.link,
            scroll: self.scroll,
            split: self.split,
            menu_align: self.menu_align,
            size: self.size,
            has_title: self.has_title(),
            class_name: self.class_name.clone(),
        }
    }

    /// The split action link was activated.
    ///
    /// With an `href`, the browser follows the link and only `on_select` is
    /// called.
    pub fn split_click(&self, event: &E)
    where
        E: Activation,
    {
        if self.disabled {
            return;
        }

        if !has_href(self.href.as_deref()) {
            event.prevent_default();
            event::call(self.on_split_click.as_ref(), event);
        }

        event::call(self.on_select.as_ref(), event);
    }
}

/// An empty `href` doesn't count.
pub(crate) fn has_href(href: Option<&str>) -> bool {
    href.is_some_and(|href| !href.is_empty())
}

/// A caller supplied toggle always wins. Otherwise the default glyph is used
/// if it's visible.
fn resolve_toggle<T>(custom: Option<T>, visible: bool, default: impl FnOnce() -> T) -> Option<T> {
    custom.or_else(|| visible.then(default))
}

/// Behaviour the dropdown delegates.
#[derive(Clone)]
pub struct Collaborators {
    pub transition: Rc<dyn Transition>,
    pub scrim: Rc<dyn Scrim>,
    pub icons: Rc<dyn IconRenderer>,
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            transition: Rc::new(Immediate),
            scrim: Rc::new(Overlay),
            icons: Rc::new(GlyphIcon),
        }
    }
}

#[derive(Into, Value)]
pub struct Dropdown(Node);

impl Dropdown {
    pub fn new<N>(props: DropdownProps, children: impl IntoIterator<Item = N>) -> Self
    where
        N: Into<Node>,
    {
        Self::with_collaborators(props, Collaborators::default(), children)
    }

    pub fn with_collaborators<N>(
        mut props: DropdownProps,
        collaborators: Collaborators,
        children: impl IntoIterator<Item = N>,
    ) -> Self
    where
        N: Into<Node>,
    {
        css::ensure_mounted();

        let Collaborators {
            transition,
            scrim,
            icons,
        } = collaborators;
        let state = DropdownState::new();
        let appearance = props.appearance();
        let menu_classes = appearance.menu_classes();
        let toggle = toggle(&mut props, &appearance, &*icons);
        let title = props.title.take();
        let attributes = mem::take(&mut props.attributes);
        let props = Rc::new(props);
        let (trigger, label) = trigger_and_label(&props, &state, title);

        let mut container = container(props.disabled, attributes)
            .classes(Sig(state
                .signal()
                .map(move |open| appearance.container_classes(open))))
            .child(trigger);

        if let Some(toggle) = toggle {
            container = container.child(toggle);
        }

        if let Some(label) = label {
            container = container.child(label);
        }

        let menu = div().classes(menu_classes).child(
            ul()
                .aria_label("submenu")
                .on_click({
                    clone!(state);
                    let close_on_menu_click = props.close_on_menu_click;
                    move |_, _| state.menu_click(close_on_menu_click)
                })
                .children(children),
        );

        Self(
            container
                .optional_child(Sig(state.signal().map({
                    clone!(state, props);
                    move |open| scrim_child(&props, &state, &*scrim, open)
                })))
                .child(menu)
                .spawn_future(notify_transitions(
                    state.signal(),
                    transition,
                    props.on_entered.clone(),
                    props.on_exited.clone(),
                ))
                .into(),
        )
    }
}

/// The outer element, before its classes and children.
///
/// Residual attributes and `disabled` belong here, not on the trigger.
fn container(disabled: bool, attributes: Attributes) -> Div {
    let container = attributes.apply(div());

    if disabled {
        container.attribute("disabled", "")
    } else {
        container
    }
}

fn toggle(
    props: &mut DropdownProps,
    appearance: &Appearance,
    icons: &dyn IconRenderer,
) -> Option<Node> {
    resolve_toggle(
        props.toggle.take(),
        appearance.is_icon_visible(props.show_icon),
        || icons.render(&props.icon, css::ICON_TOGGLE),
    )
}

/// The trigger button and, for a split dropdown, the action link.
///
/// A split dropdown shows its title in the link. Otherwise the title goes in
/// the button.
fn trigger_and_label(
    props: &Rc<DropdownProps>,
    state: &DropdownState,
    title: Option<Content>,
) -> (Node, Option<Node>) {
    let mut trigger = button()
        .r#type("button")
        .classes(with_class_name(css::DROPDOWN_TOGGLE, &props.button_class_name))
        .aria_haspopup("true")
        .on_click({
            clone!(state, props);
            move |ev, _| state.trigger_click(&ev, props.on_click.as_ref())
        });

    if let Some(label) = &props.button_aria_label {
        trigger = trigger.aria_label(label.clone());
    }

    if props.split {
        (trigger.into(), Some(split_link(props, title)))
    } else {
        if let Some(title) = title {
            trigger = title.fill(trigger);
        }

        (trigger.into(), None)
    }
}

fn split_link(props: &Rc<DropdownProps>, title: Option<Content>) -> Node {
    let mut link = a()
        .classes(with_class_name(css::DROPDOWN_LABEL, &props.split_class_name))
        .on_click({
            clone!(props);
            move |ev, _| props.split_click(&ev)
        });

    if let Some(href) = &props.href {
        link = link.href(href.clone());
    }

    if let Some(label) = &props.label_aria_label {
        link = link.aria_label(label.clone());
    }

    if let Some(title) = title {
        link = title.fill(link);
    }

    link.into()
}

fn scrim_child(
    props: &DropdownProps,
    state: &DropdownState,
    scrim: &dyn Scrim,
    open: bool,
) -> Option<Node> {
    scrim::is_visible(props.blocking_scrim, props.disable_scrim, open).then(|| {
        let state = state.clone();
        let dismiss: Notify = Rc::new(move || state.scrim_click());
        scrim.render(dismiss)
    })
}

fn with_class_name(class: &str, class_name: &Option<String>) -> Vec<String> {
    [class.to_owned()]
        .into_iter()
        .chain(class_name.clone())
        .collect()
}

/// Run a transition each time the menu opens or closes, then notify the
/// caller.
fn notify_transitions(
    open: impl Signal<Item = bool> + 'static,
    transition: Rc<dyn Transition>,
    on_entered: Option<Notify>,
    on_exited: Option<Notify>,
) -> impl Future<Output = ()> + 'static {
    let mut tracker = TransitionTracker::new();

    open.for_each(move |open| {
        if let Some(phase) = tracker.observe(open) {
            let notify = match phase {
                Phase::Opening => on_entered.clone(),
                Phase::Closing => on_exited.clone(),
            };

            transition.run(
                phase,
                Box::new(move || {
                    if let Some(notify) = notify {
                        notify()
                    }
                }),
            );
        }

        async {}
    })
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use silkenweb::{elements::html::span, node::Node, prelude::Element};

    use super::{
        container, has_href, resolve_toggle, scrim_child, toggle, trigger_and_label,
        DropdownProps, DropdownState, MenuAlign, Size,
    };
    use crate::{
        attributes::Attributes,
        event::testing::{Calls, Click},
        icon::GlyphIcon,
        scrim::Overlay,
        Error,
    };

    fn html(node: impl Into<Node>) -> String {
        node.into().to_string()
    }

    fn split_props(calls: &Calls) -> DropdownProps<Click> {
        DropdownProps {
            split: true,
            title: Some("Save".into()),
            ..DropdownProps::default()
        }
        .on_split_click(calls.recorder::<Click>("split"))
        .on_select(calls.recorder::<Click>("select"))
    }

    #[test]
    fn defaults() {
        let props = DropdownProps::<Click>::default();

        assert!(props.close_on_menu_click);
        assert!(props.show_icon);
        assert_eq!(props.menu_align, MenuAlign::None);
        assert_eq!(props.size, Size::Normal);
        assert_eq!(props.icon, "chevron_down");
        assert!(!props.has_title());
    }

    #[test]
    fn split_click_without_href() {
        let calls = Calls::default();
        let click = Click::default();

        split_props(&calls).split_click(&click);

        assert!(click.prevented());
        assert_eq!(calls.take(), ["split", "select"]);
    }

    #[test]
    fn split_click_with_href() {
        let calls = Calls::default();
        let click = Click::default();
        let props = DropdownProps {
            href: Some("/save".to_owned()),
            ..split_props(&calls)
        };

        props.split_click(&click);

        assert!(!click.prevented());
        assert_eq!(calls.take(), ["select"]);
    }

    #[test]
    fn split_click_with_empty_href() {
        let calls = Calls::default();
        let click = Click::default();
        let props = DropdownProps {
            href: Some(String::new()),
            ..split_props(&calls)
        };

        props.split_click(&click);

        assert!(click.prevented());
        assert_eq!(calls.take(), ["split", "select"]);
    }

    #[test]
    fn disabled_split_click() {
        let calls = Calls::default();
        let click = Click::default();
        let props = DropdownProps {
            disabled: true,
            ..split_props(&calls)
        };

        props.split_click(&click);

        assert!(!click.prevented());
        assert!(calls.take().is_empty());
    }

    #[test]
    fn split_click_without_callbacks() {
        let click = Click::default();

        DropdownProps::<Click>::default().split_click(&click);

        assert!(click.prevented());
    }

    #[test]
    fn hrefs() {
        assert!(!has_href(None));
        assert!(!has_href(Some("")));
        assert!(has_href(Some("#")));
    }

    #[test]
    fn custom_toggle_wins() {
        for visible in [false, true] {
            assert_eq!(
                resolve_toggle(Some("custom"), visible, || "chevron"),
                Some("custom")
            );
        }
    }

    #[test]
    fn default_toggle() {
        assert_eq!(resolve_toggle(None, true, || "chevron"), Some("chevron"));
        assert_eq!(resolve_toggle(None, false, || "chevron"), None);
    }

    #[test]
    fn untitled_dropdown_shows_icon() {
        let props = DropdownProps::<Click>::default();
        let appearance = props.appearance();

        assert!(appearance
            .container_classes(false)
            .contains(&"dropdown-icon-only".to_owned()));
        assert_eq!(
            resolve_toggle(None, appearance.is_icon_visible(props.show_icon), || {
                "chevron"
            }),
            Some("chevron")
        );
    }

    #[test]
    fn titled_dropdown_can_hide_icon() {
        let props = DropdownProps::<Click> {
            title: Some("Menu".into()),
            show_icon: false,
            ..DropdownProps::default()
        };

        assert!(!props.appearance().is_icon_visible(props.show_icon));
    }

    #[test]
    fn empty_title_is_absent() {
        let props = DropdownProps::<Click> {
            title: Some("".into()),
            ..DropdownProps::default()
        };

        assert!(!props.has_title());
        assert!(!props.appearance().has_title);
    }

    #[test]
    fn from_props() {
        let props = DropdownProps::<Click>::from_props([
            ("split", ""),
            ("flat", "true"),
            ("closeOnMenuClick", "false"),
            ("menuAlign", "right"),
            ("size", "small"),
            ("title", "Actions"),
            ("href", "/actions"),
            ("className", "toolbar-menu"),
            ("id", "actions"),
            ("data-test", "menu"),
        ])
        .unwrap();

        assert!(props.split);
        assert!(props.flat);
        assert!(!props.close_on_menu_click);
        assert_eq!(props.menu_align, MenuAlign::Right);
        assert_eq!(props.size, Size::Small);
        assert!(props.has_title());
        assert_eq!(props.href.as_deref(), Some("/actions"));
        assert_eq!(props.class_name.as_deref(), Some("toolbar-menu"));
        assert_eq!(
            props.attributes.iter().collect::<Vec<_>>(),
            [("data-test", "menu"), ("id", "actions")]
        );
    }

    #[test]
    fn from_props_drops_unrepresentable() {
        let props =
            DropdownProps::<Click>::from_props([("onClick", "alert(1)"), ("toggle", "x")]).unwrap();

        assert!(props.on_click.is_none());
        assert!(props.toggle.is_none());
        assert!(props.attributes.is_empty());
    }

    #[test]
    fn from_props_errors() {
        assert_eq!(
            DropdownProps::<Click>::from_props([("border", "yes")]).err(),
            Some(Error::InvalidBool {
                key: "border".to_owned(),
                value: "yes".to_owned()
            })
        );
        assert_eq!(
            DropdownProps::<Click>::from_props([("menuAlign", "center")]).err(),
            Some(Error::InvalidMenuAlign("center".to_owned()))
        );
        assert_eq!(
            DropdownProps::<Click>::from_props([("size", "huge")]).err(),
            Some(Error::InvalidSize("huge".to_owned()))
        );
    }

    #[test]
    fn split_title_renders_in_label() {
        let props = Rc::new(DropdownProps {
            split: true,
            href: Some("/save".to_owned()),
            label_aria_label: Some("Save now".to_owned()),
            split_class_name: Some("primary".to_owned()),
            ..DropdownProps::default()
        });

        let (trigger, label) =
            trigger_and_label(&props, &DropdownState::new(), Some("Save".into()));
        let trigger = html(trigger);
        let label = html(label.expect("split dropdowns have a label"));

        assert!(trigger.starts_with("<button"), "{trigger}");
        assert!(trigger.contains(r#"aria-haspopup="true""#), "{trigger}");
        assert!(!trigger.contains("Save"), "{trigger}");
        assert!(label.starts_with("<a"), "{label}");
        assert!(label.contains("dropdown-label primary"), "{label}");
        assert!(label.contains(r#"href="/save""#), "{label}");
        assert!(label.contains(r#"aria-label="Save now""#), "{label}");
        assert!(label.contains(">Save</a>"), "{label}");
    }

    #[test]
    fn title_renders_in_trigger() {
        let props = Rc::new(DropdownProps {
            button_aria_label: Some("Open actions".to_owned()),
            ..DropdownProps::default()
        });

        let (trigger, label) =
            trigger_and_label(&props, &DropdownState::new(), Some("Actions".into()));
        let trigger = html(trigger);

        assert!(label.is_none());
        assert!(trigger.contains(r#"type="button""#), "{trigger}");
        assert!(trigger.contains(r#"aria-label="Open actions""#), "{trigger}");
        assert!(trigger.contains(">Actions</button>"), "{trigger}");
    }

    #[test]
    fn residual_attributes_on_container() {
        let attributes = Attributes::new()
            .with("data-test", "menu")
            .with("id", "actions");

        let disabled = html(container(true, attributes.clone()));
        let enabled = html(container(false, attributes));

        assert!(disabled.starts_with("<div"), "{disabled}");
        assert!(disabled.contains(r#"data-test="menu""#), "{disabled}");
        assert!(disabled.contains(r#"id="actions""#), "{disabled}");
        assert!(disabled.contains("disabled"), "{disabled}");
        assert!(enabled.contains(r#"id="actions""#), "{enabled}");
        assert!(!enabled.contains("disabled"), "{enabled}");
    }

    #[test]
    fn custom_toggle_renders_without_icon() {
        let mut props = DropdownProps {
            title: Some("Menu".into()),
            show_icon: false,
            toggle: Some(span().class("caret").into()),
            ..DropdownProps::default()
        };
        let appearance = props.appearance();

        let toggle = toggle(&mut props, &appearance, &GlyphIcon).map(html);

        assert!(toggle.expect("custom toggle").contains(r#"class="caret""#));
        assert!(props.toggle.is_none());
    }

    #[test]
    fn default_toggle_renders_icon() {
        let mut untitled = DropdownProps::default();
        let appearance = untitled.appearance();
        let icon = toggle(&mut untitled, &appearance, &GlyphIcon).map(html);

        assert!(icon.expect("icon toggle").contains("icon-chevron-down"));

        let mut hidden = DropdownProps {
            title: Some("Menu".into()),
            show_icon: false,
            ..DropdownProps::default()
        };
        let appearance = hidden.appearance();

        assert!(toggle(&mut hidden, &appearance, &GlyphIcon).is_none());
    }

    #[test]
    fn no_scrim_when_disabled() {
        let state = DropdownState::new();

        for blocking_scrim in [false, true] {
            let props = DropdownProps {
                blocking_scrim,
                disable_scrim: true,
                ..DropdownProps::default()
            };

            for open in [false, true] {
                assert!(scrim_child(&props, &state, &Overlay, open).is_none());
            }
        }
    }

    #[test]
    fn blocking_scrim_when_open() {
        let state = DropdownState::new();
        let props = DropdownProps {
            blocking_scrim: true,
            ..DropdownProps::default()
        };

        assert!(scrim_child(&props, &state, &Overlay, false).is_none());
        assert!(scrim_child(&props, &state, &Overlay, true)
            .map(html)
            .expect("open blocking dropdowns have a scrim")
            .contains(r#"class="scrim""#));
    }
}
