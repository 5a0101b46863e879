//! Browser binding for the two-tier header and its inline search box.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window};

use super::elements::{as_input, by_id, query, set_attr, set_class, set_style};
use super::events::{listen, on_activate};
use crate::components::header::{HeaderController, HeaderView};
use crate::state::header::{SearchAffordance, translate_css};
use crate::util::browser::describe_js;
use crate::util::text::caret_end;
use crate::util::timer::BrowserScheduler;

type SharedHeader = Rc<RefCell<HeaderController<DomHeader, BrowserScheduler>>>;

/// Inline search box in the secondary tier.
pub struct SubSearch {
    container: Element,
    input: Option<HtmlInputElement>,
}

pub struct DomHeader {
    top: HtmlElement,
    sub: HtmlElement,
    top_search: Option<HtmlInputElement>,
    search: Option<SubSearch>,
}

impl HeaderView for DomHeader {
    fn top_header_height(&self) -> f64 {
        f64::from(self.top.offset_height())
    }

    fn apply_translate(&self, translate: f64) {
        let css = translate_css(translate);
        set_style(&self.top, "transform", &css);
        set_style(&self.sub, "transform", &css);
    }

    fn clear_top_search(&self) {
        if let Some(input) = &self.top_search {
            input.set_value("");
        }
    }

    fn render_search(&self, affordance: SearchAffordance) {
        let Some(search) = &self.search else { return };
        set_class(&search.container, "expanded", affordance == SearchAffordance::Expanded);
        set_class(&search.container, "collapsed", affordance == SearchAffordance::Collapsed);
        set_attr(&search.container, "aria-hidden", if affordance.aria_hidden() { "true" } else { "false" });
    }

    fn clear_search_input(&self) {
        if let Some(input) = self.search.as_ref().and_then(|search| search.input.as_ref()) {
            input.set_value("");
        }
    }

    fn focus_search_input(&self) {
        let Some(input) = self.search.as_ref().and_then(|search| search.input.as_ref()) else {
            return;
        };
        if let Err(err) = input.focus() {
            log::debug!("search input not focusable: {}", describe_js(&err));
            return;
        }
        let end = caret_end(&input.value());
        if let Err(err) = input.set_selection_range(end, end) {
            log::debug!("caret not moved: {}", describe_js(&err));
        }
    }
}

fn sub_search(document: &Document) -> Option<SubSearch> {
    let container = document.get_element_by_id("searchContainerSub")?;
    let input = query(&container, "input").and_then(as_input);
    Some(SubSearch { container, input })
}

/// Wire scroll sync and the search affordance.
///
/// Registers nothing when either header tier is missing.
pub fn wire(window: &Window, document: &Document) {
    let (Some(top), Some(sub)) = (by_id::<HtmlElement>(document, "topHeader"), by_id::<HtmlElement>(document, "subHeader"))
    else {
        log::debug!("header tiers missing, scroll sync disabled");
        return;
    };
    let top_search = document
        .get_element_by_id("searchContainerTop")
        .and_then(|container| query(&container, "input"))
        .and_then(as_input);
    let search = sub_search(document);
    let icon = search.as_ref().and_then(|search| query(&search.container, ".search-icon"));
    let close = search.as_ref().and_then(|search| query(&search.container, ".closeBtn"));

    let view = Rc::new(DomHeader { top, sub, top_search, search });
    let controller: SharedHeader = Rc::new(RefCell::new(HeaderController::new(view, BrowserScheduler)));

    let initial = window.scroll_y().unwrap_or_default();
    controller.borrow_mut().on_scroll(initial);

    let on_scroll = Rc::clone(&controller);
    let scrolled = window.clone();
    listen(window, "scroll", move |_| {
        let scroll_y = scrolled.scroll_y().unwrap_or_default();
        on_scroll.borrow_mut().on_scroll(scroll_y);
    });
    let on_resize = Rc::clone(&controller);
    listen(window, "resize", move |_| on_resize.borrow_mut().on_resize());

    if let Some(icon) = icon {
        let toggled = Rc::clone(&controller);
        on_activate(&icon, move || toggled.borrow_mut().toggle_search());
    }
    if let Some(close) = close {
        let closed = Rc::clone(&controller);
        on_activate(&close, move || closed.borrow_mut().collapse_search());
    }
}
