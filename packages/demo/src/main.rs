use gloo_console::log;
use silkenweb::{
    elements::html::{div, h2, Div},
    mount,
    prelude::ParentElement,
};
use silkenweb_pui::{
    attributes::Attributes,
    dropdown::{Dropdown, DropdownProps, MenuAlign, Size},
    dropdown_item::{DropdownItem, DropdownItemProps},
};

fn logged(name: &'static str) -> impl Fn(&web_sys::MouseEvent) + 'static {
    move |_| log!(name)
}

fn items() -> Vec<DropdownItem> {
    let item = |event_key: &str, label: &str| {
        DropdownItem::new(
            DropdownItemProps::default()
                .event_key(event_key)
                .on_select(|_, key| log!(format!("Selected {key:?}"))),
            label,
        )
    };

    vec![
        DropdownItem::new(DropdownItemProps::default().header(), "File"),
        item("open", "Open"),
        item("rename", "Rename"),
        DropdownItem::new(DropdownItemProps::default().divider(), ""),
        DropdownItem::new(
            DropdownItemProps::default()
                .href("https://example.com/help")
                .on_click(logged("Help clicked")),
            "Help",
        ),
        DropdownItem::new(
            DropdownItemProps::default()
                .disabled(true)
                .on_select(|_, key| log!(format!("Disabled item selected {key:?}"))),
            "Delete",
        ),
    ]
}

fn section(heading: &str, dropdown: Dropdown) -> Div {
    div().child(h2().text(heading)).child(dropdown)
}

fn titled(title: &str) -> DropdownProps {
    DropdownProps {
        title: Some(title.into()),
        ..DropdownProps::default()
    }
    .on_click(logged("Trigger clicked"))
    .on_entered(|| log!("Menu entered"))
    .on_exited(|| log!("Menu exited"))
}

fn from_props() -> DropdownProps {
    DropdownProps::from_props([
        ("title", "Built from props"),
        ("size", "large"),
        ("border", "true"),
        ("data-test", "props-dropdown"),
    ])
    .unwrap_or_else(|e| {
        log!(format!("Invalid dropdown props: {e}"));
        DropdownProps::default()
    })
}

fn app() -> Div {
    div()
        .child(section("Default", Dropdown::new(titled("Actions"), items())))
        .child(section(
            "Icon only",
            Dropdown::new(DropdownProps::default(), items()),
        ))
        .child(section(
            "Split",
            Dropdown::new(
                DropdownProps {
                    split: true,
                    label_aria_label: Some("Save".to_owned()),
                    attributes: Attributes::new().with("id", "save-menu"),
                    ..titled("Save")
                }
                .on_split_click(logged("Split action clicked"))
                .on_select(logged("Split action selected")),
                items(),
            ),
        ))
        .child(section(
            "Flat, small, right aligned",
            Dropdown::new(
                DropdownProps {
                    flat: true,
                    size: Size::Small,
                    menu_align: MenuAlign::Right,
                    ..titled("Flat")
                },
                items(),
            ),
        ))
        .child(section(
            "Link with blocking scrim",
            Dropdown::new(
                DropdownProps {
                    link: true,
                    blocking_scrim: true,
                    close_on_menu_click: false,
                    scroll: true,
                    ..titled("Link")
                },
                items(),
            ),
        ))
        .child(section("From props", Dropdown::new(from_props(), items())))
}

fn main() {
    log!("Mounting dropdown demo");
    mount("app", app());
}
