//! Browser binding for the theme button.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, HtmlImageElement, HtmlLinkElement};

use super::copy_buttons::CopyButtons;
use super::elements::{by_id, set_attr, set_class};
use super::events::on_activate;
use super::side_menu::SharedSideMenu;
use crate::components::theme_toggle::{ThemeStore, ThemeToggle, ThemeView};
use crate::state::theme::{DARK_CLASS, Theme};
use crate::util::storage::LocalStore;

pub struct DomTheme {
    document: Document,
    button: Option<Element>,
    icon: Option<HtmlImageElement>,
    stylesheet: Option<HtmlLinkElement>,
}

impl ThemeView for DomTheme {
    fn apply(&self, theme: Theme) {
        if let Some(body) = self.document.body() {
            set_class(&body, DARK_CLASS, theme.is_dark());
        }
        if let Some(icon) = &self.icon {
            icon.set_src(theme.toggle_icon());
        }
        if let Some(button) = &self.button {
            set_attr(button, "data-tooltip", theme.toggle_tooltip());
        }
        if let Some(stylesheet) = &self.stylesheet {
            stylesheet.set_href(theme.highlight_stylesheet());
        }
    }
}

/// Apply the stored theme and wire the toggle button.
///
/// Toggling recolors `copy_buttons` and closes the side menu.
pub fn wire(document: &Document, copy_buttons: &CopyButtons, side_menu: Option<SharedSideMenu>) -> Theme {
    let button = document.get_element_by_id("themeBtn");
    let view = DomTheme {
        document: document.clone(),
        button: button.clone(),
        icon: by_id(document, "themeIcon"),
        stylesheet: by_id(document, "prism-theme"),
    };
    let mut toggle = ThemeToggle::load(ThemeStore::new(LocalStore), view);
    let loaded = toggle.current();

    let recolor = copy_buttons.clone();
    toggle.on_toggle(move |theme| recolor.set_theme(theme));
    if let Some(menu) = side_menu {
        toggle.on_toggle(move |_| menu.borrow_mut().close());
    }

    match button {
        Some(button) => {
            let toggle = Rc::new(RefCell::new(toggle));
            on_activate(&button, move || {
                let theme = toggle.borrow_mut().toggle();
                log::debug!("theme switched to {}", theme.as_str());
            });
        }
        None => log::debug!("no theme button, stored theme applied only"),
    }
    loaded
}
