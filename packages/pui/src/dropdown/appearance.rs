use strum::{AsRefStr, Display, EnumString};

use crate::css;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum MenuAlign {
    #[default]
    None,
    Left,
    Right,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Size {
    #[default]
    Normal,
    Large,
    Small,
}

/// The visual variant of a dropdown, and the classes it implies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Appearance {
    pub border: bool,
    pub flat: bool,
    pub float_menu: bool,
    pub link: bool,
    pub scroll: bool,
    pub split: bool,
    pub menu_align: MenuAlign,
    pub size: Size,
    pub has_title: bool,
    pub class_name: Option<String>,
}

impl Appearance {
    /// Classes for the outermost element.
    ///
    /// The caller's class name comes last, so it wins in the cascade.
    pub fn container_classes(&self, open: bool) -> Vec<String> {
        let mut classes = vec![css::DROPDOWN];

        let flags = [
            (self.flat, css::DROPDOWN_FLAT),
            (self.split, css::DROPDOWN_SPLIT),
            (self.link, css::DROPDOWN_LINK),
            (self.size == Size::Large, css::DROPDOWN_LG),
            (self.size == Size::Small, css::DROPDOWN_SM),
            (self.is_icon_only(), css::DROPDOWN_ICON_ONLY),
        ];
        classes.extend(flags.into_iter().filter_map(|(on, class)| on.then_some(class)));
        classes.push(if open {
            css::DROPDOWN_OPEN
        } else {
            css::DROPDOWN_CLOSED
        });

        classes
            .into_iter()
            .map(str::to_owned)
            .chain(self.class_name.clone())
            .collect()
    }

    pub fn menu_classes(&self) -> Vec<&'static str> {
        let flags = [
            (self.border, css::DROPDOWN_BORDER),
            (self.menu_align == MenuAlign::Right, css::DROPDOWN_MENU_RIGHT),
            (self.menu_align == MenuAlign::Left, css::DROPDOWN_MENU_LEFT),
            (self.is_menu_floating(), css::DROPDOWN_MENU_FLOAT),
            (self.scroll, css::DROPDOWN_MENU_SCROLL),
        ];

        [css::DROPDOWN_MENU]
            .into_iter()
            .chain(flags.into_iter().filter_map(|(on, class)| on.then_some(class)))
            .collect()
    }

    /// Whether the toggle glyph is shown.
    ///
    /// Without a title or in split mode, the glyph is the only thing in the
    /// trigger, so it's shown whatever `show_icon` says.
    pub fn is_icon_visible(&self, show_icon: bool) -> bool {
        show_icon || !self.has_title || self.split
    }

    fn is_icon_only(&self) -> bool {
        !self.split && !self.has_title
    }

    fn is_menu_floating(&self) -> bool {
        self.split
            || self.flat
            || self.link
            || self.float_menu
            || !self.has_title
            || self.menu_align != MenuAlign::None
    }
}
