//! Browser binding for the language popup.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Node, Window};

use super::elements::{by_id, query_all, set_class, set_style};
use super::events::listen;
use crate::components::language_menu::{LanguageMenu, PopupView};
use crate::util::browser::navigate_or_log;
use crate::util::timer::BrowserScheduler;

pub struct DomPopup {
    menu: HtmlElement,
}

impl PopupView for DomPopup {
    fn set_displayed(&self, displayed: bool) {
        set_style(&self.menu, "display", if displayed { "block" } else { "none" });
    }

    fn set_active(&self, active: bool) {
        set_class(&self.menu, "active", active);
    }
}

/// Wire the popup icon, outside-click dismissal and the language options.
pub fn wire(window: &Window, document: &Document) {
    let Some(menu) = by_id::<HtmlElement>(document, "languageMenu") else {
        log::debug!("no language menu");
        return;
    };
    let Some(icon) = document.query_selector(".language-menu-icon").unwrap_or_default() else {
        log::debug!("no language menu icon");
        return;
    };

    let view = Rc::new(DomPopup { menu: menu.clone() });
    let popup = Rc::new(RefCell::new(LanguageMenu::new(view, BrowserScheduler)));

    let toggled = Rc::clone(&popup);
    listen(&icon, "click", move |_| toggled.borrow_mut().toggle());

    let outside = Rc::clone(&popup);
    let (outside_menu, outside_icon) = (menu.clone(), icon.clone());
    listen(document, "click", move |event| {
        let target = event.target().and_then(|target| target.dyn_ref::<Node>().cloned());
        if !outside_menu.contains(target.as_ref()) && !outside_icon.contains(target.as_ref()) {
            outside.borrow_mut().on_outside_click();
        }
    });

    for option in query_all(document, "#languageMenu [data-lang]") {
        let Some(lang) = option.get_attribute("data-lang") else { continue };
        let selected = Rc::clone(&popup);
        let location = window.location();
        listen(&option, "click", move |event| {
            event.prevent_default();
            let path = location.pathname().unwrap_or_default();
            let target = selected.borrow_mut().select(&path, &lang);
            if let Some(href) = target {
                navigate_or_log(&href);
            }
        });
    }
}
