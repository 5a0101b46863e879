//! Page-lifetime event listener helpers.

use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, EventTarget, KeyboardEvent};

use crate::util::browser::describe_js;

/// Attach `handler` to `target` for the rest of the page's life.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("could not listen for {event}: {}", describe_js(&err));
    }
    closure.forget();
}

/// Enter or Space on a focused control, which should act like a click.
pub fn is_activation_key(event: &Event) -> bool {
    event
        .dyn_ref::<KeyboardEvent>()
        .is_some_and(|key| matches!(key.key().as_str(), "Enter" | " " | "Spacebar"))
}

/// Listen for clicks and keyboard activation on `target`.
pub fn on_activate(target: &EventTarget, handler: impl Fn() + 'static) {
    let handler = std::rc::Rc::new(handler);
    let on_click = std::rc::Rc::clone(&handler);
    listen(target, "click", move |_| on_click());
    listen(target, "keydown", move |event| {
        if is_activation_key(&event) {
            event.prevent_default();
            handler();
        }
    });
}

/// Run `ready` once the document has been parsed.
pub fn when_ready(document: &Document, ready: impl FnOnce() + 'static) {
    let state = Reflect::get(document, &JsValue::from_str("readyState"))
        .map(|value| value.as_string().unwrap_or_default())
        .unwrap_or_default();
    if state != "loading" {
        ready();
        return;
    }
    let mut ready = Some(ready);
    listen(document, "DOMContentLoaded", move |_| {
        if let Some(ready) = ready.take() {
            ready();
        }
    });
}
