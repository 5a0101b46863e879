//! Browser binding for the slide-out panel.
//!
//! DESIGN
//! ======
//! Scroll forwarding listens on the document with non-passive listeners so it
//! can cancel the page's own scrolling. The listeners are owned by a
//! [`ScrollForwarding`] value; its `Drop` detaches them.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, Event, HtmlElement, KeyboardEvent, TouchEvent, WheelEvent};

use super::elements::{by_id, set_attr, set_class, set_style};
use super::events::listen;
use crate::components::side_menu::{SideMenuController, SideMenuView};
use crate::state::side_menu::{PanelScroll, TouchDrag, key_scroll};
use crate::util::browser::{self, BrowserError, describe_js};

pub type SharedSideMenu = Rc<RefCell<SideMenuController<DomSideMenu>>>;

pub struct DomSideMenu {
    document: Document,
    trigger: Element,
    panel: HtmlElement,
    overlay: Element,
}

impl SideMenuView for DomSideMenu {
    type Forwarding = ScrollForwarding;

    fn scroll_page_to_top(&self) -> Result<(), BrowserError> {
        browser::scroll_to_top()
    }

    fn jump_page_to_top(&self) {
        browser::jump_to_top();
    }

    fn render_open(&self, open: bool) {
        set_class(&self.panel, "open", open);
        set_class(&self.trigger, "open", open);
        set_attr(&self.trigger, "aria-expanded", if open { "true" } else { "false" });
        if let Some(body) = self.document.body() {
            set_class(&body, "side-open", open);
        }
        set_class(&self.overlay, "show", open);
    }

    fn attach_forwarding(&self) -> ScrollForwarding {
        ScrollForwarding::attach(self.document.clone(), self.panel.clone())
    }

    fn reset_panel_scroll(&self) {
        self.panel.set_scroll_top(0);
    }
}

/// Document listeners that redirect wheel, touch and navigation keys into the
/// panel while it is open.
pub struct ScrollForwarding {
    document: Document,
    listeners: Vec<(&'static str, Closure<dyn FnMut(Event)>)>,
}

impl ScrollForwarding {
    fn attach(document: Document, panel: HtmlElement) -> Self {
        let mut forwarding = Self { document, listeners: Vec::new() };

        let wheel_panel = panel.clone();
        forwarding.add("wheel", move |event| {
            if let Some(wheel) = event.dyn_ref::<WheelEvent>() {
                event.prevent_default();
                scroll_panel(&wheel_panel, PanelScroll::By(wheel.delta_y()));
            }
        });

        let drag = Rc::new(Cell::new(TouchDrag::default()));
        let started = Rc::clone(&drag);
        forwarding.add("touchstart", move |event| {
            if let Some(y) = touch_y(&event) {
                let mut next = started.get();
                next.start(y);
                started.set(next);
            }
        });
        let touch_panel = panel.clone();
        forwarding.add("touchmove", move |event| {
            let Some(y) = touch_y(&event) else { return };
            let mut next = drag.get();
            if let Some(delta) = next.drag_to(y) {
                event.prevent_default();
                scroll_panel(&touch_panel, PanelScroll::By(delta));
            }
            drag.set(next);
        });

        forwarding.add("keydown", move |event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>() else { return };
            let viewport = f64::from(panel.client_height());
            let content = f64::from(panel.scroll_height());
            if let Some(scroll) = key_scroll(&key.key(), viewport, content) {
                event.prevent_default();
                scroll_panel(&panel, scroll);
            }
        });
        forwarding
    }

    fn add(&mut self, event: &'static str, handler: impl FnMut(Event) + 'static) {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        match self.document.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(()) => self.listeners.push((event, closure)),
            Err(err) => log::warn!("side menu cannot forward {event}: {}", describe_js(&err)),
        }
    }
}

impl Drop for ScrollForwarding {
    fn drop(&mut self) {
        for (event, closure) in &self.listeners {
            if let Err(err) = self
                .document
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            {
                log::debug!("{event} forwarding not detached: {}", describe_js(&err));
            }
        }
    }
}

fn touch_y(event: &Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some(f64::from(touch.client_y()))
}

#[allow(clippy::cast_possible_truncation)]
fn scroll_panel(panel: &HtmlElement, scroll: PanelScroll) {
    let next = scroll.apply(f64::from(panel.scroll_top()));
    panel.set_scroll_top(next.round() as i32);
}

/// Wire the trigger, panel and overlay.
///
/// A trigger without its panel or overlay is hidden and left inert.
pub fn wire(document: &Document) -> Option<SharedSideMenu> {
    let Some(trigger) = by_id::<HtmlElement>(document, "hamburger") else {
        log::debug!("no side menu trigger");
        return None;
    };
    let (Some(panel), Some(overlay)) = (by_id::<HtmlElement>(document, "sideMenu"), document.get_element_by_id("overlay"))
    else {
        log::debug!("side menu panel or overlay missing, hiding trigger");
        set_style(&trigger, "display", "none");
        return None;
    };

    let view = DomSideMenu { document: document.clone(), trigger: trigger.clone().into(), panel, overlay: overlay.clone() };
    let controller: SharedSideMenu = Rc::new(RefCell::new(SideMenuController::new(view)));

    let toggled = Rc::clone(&controller);
    listen(&trigger, "click", move |_| toggled.borrow_mut().toggle());
    let dismissed = Rc::clone(&controller);
    listen(&overlay, "click", move |_| dismissed.borrow_mut().close());
    Some(controller)
}
