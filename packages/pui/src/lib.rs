//! Dropdown menu components for [silkenweb].
//!
//! [`dropdown::Dropdown`] is the menu container, and
//! [`dropdown_item::DropdownItem`] renders its rows. They share styling, but
//! are composed by the caller:
//!
//! ```no_run
//! use silkenweb_pui::{
//!     dropdown::{Dropdown, DropdownProps},
//!     dropdown_item::{DropdownItem, DropdownItemProps},
//! };
//!
//! let menu = Dropdown::new(
//!     DropdownProps {
//!         title: Some("Actions".into()),
//!         ..DropdownProps::default()
//!     },
//!     [DropdownItem::new(
//!         DropdownItemProps::default().event_key("rename"),
//!         "Rename",
//!     )],
//! );
//! ```
pub mod attributes;
pub mod content;
pub mod dropdown;
pub mod dropdown_item;
pub mod event;
pub mod icon;
pub mod scrim;
pub mod transition;

mod error;

pub use error::{Error, Result};

pub mod css {
    silkenweb::css!(path = "css/dropdowns.css");

    pub use class::*;

    /// Mount the dropdown stylesheet in the document head.
    ///
    /// Only the first call mounts anything. The stylesheet stays mounted for
    /// the lifetime of the page. Off the browser there's no document head, so
    /// this does nothing.
    pub fn ensure_mounted() {
        #[cfg(target_arch = "wasm32")]
        {
            use once_cell::sync::OnceCell;

            static MOUNTED: OnceCell<()> = OnceCell::new();

            MOUNTED.get_or_init(stylesheet::mount);
        }
    }
}
