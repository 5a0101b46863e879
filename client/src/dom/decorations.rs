//! One-shot page decorations: letter wave, breadcrumbs, search bars, Prism.
//!
//! Each pass is guarded by a `data-*` marker, so running it twice leaves the
//! page unchanged.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, Window};

use super::elements::{as_input, query_all, set_attr, set_style, text_of};
use super::events::listen;
use crate::util::browser::{BrowserError, describe_js, navigate_or_log};
use crate::util::nav::{breadcrumb_href, search_href};
use crate::util::text::{LETTER_TRANSITION, letter_spans};

/// Replace each `.top-links a` label with one span per character.
pub fn wrap_top_link_letters(document: &Document) {
    for link in query_all(document, ".top-links a") {
        if link.has_attribute("data-wrapped") {
            continue;
        }
        let spans = letter_spans(&text_of(&link));
        link.set_text_content(None);
        for span in spans {
            if let Err(err) = append_letter(document, &link, &span.glyph, &span.transition_delay()) {
                log::debug!("letter span not added: {err}");
            }
        }
        set_attr(&link, "data-wrapped", "1");
    }
}

fn append_letter(document: &Document, link: &Element, glyph: &str, delay: &str) -> Result<(), BrowserError> {
    let span = document
        .create_element("span")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| BrowserError::Dom("span is not an html element".to_owned()))?;
    span.set_class_name("char");
    span.set_text_content(Some(glyph));
    set_style(&span, "display", "inline-block");
    set_style(&span, "transition", LETTER_TRANSITION);
    set_style(&span, "transition-delay", delay);
    link.append_child(&span)?;
    Ok(())
}

/// Make each `.sub-crumbs .crumb` navigate to its prefix of the trail.
pub fn wire_breadcrumbs(document: &Document) {
    let crumbs = query_all(document, ".sub-crumbs .crumb");
    let labels: Vec<String> = crumbs.iter().map(text_of).collect();
    for (index, crumb) in crumbs.into_iter().enumerate() {
        let labels = labels.clone();
        let page = document.clone();
        listen(&crumb, "click", move |event| {
            event.prevent_default();
            let lang = page
                .document_element()
                .and_then(|root| root.get_attribute("lang"))
                .unwrap_or_default();
            if let Some(href) = breadcrumb_href(&lang, &labels, index) {
                navigate_or_log(&href);
            }
        });
    }
}

/// Enter in any `.search-input` opens the search page for its trimmed value.
pub fn wire_search_bars(document: &Document) {
    for bar in query_all(document, ".search-input") {
        if bar.has_attribute("data-search-init") {
            continue;
        }
        set_attr(&bar, "data-search-init", "1");
        let Some(input) = as_input(bar) else { continue };
        let field = input.clone();
        listen(&input, "keydown", move |event| {
            let is_enter = event.dyn_ref::<KeyboardEvent>().is_some_and(|key| key.key() == "Enter");
            if !is_enter {
                return;
            }
            if let Some(href) = search_href(&field.value()) {
                navigate_or_log(&href);
            }
        });
    }
}

/// Run `Prism.highlightAll()` if the highlighter script loaded.
pub fn highlight_code(window: &Window) {
    let prism = Reflect::get(window, &JsValue::from_str("Prism")).unwrap_or(JsValue::UNDEFINED);
    if prism.is_undefined() || prism.is_null() {
        log::error!("Prism is not loaded, code blocks stay unhighlighted");
        return;
    }
    let highlight = Reflect::get(&prism, &JsValue::from_str("highlightAll"))
        .map_err(|err| describe_js(&err))
        .and_then(|value| value.dyn_into::<Function>().map_err(|value| describe_js(&value)));
    if let Err(reason) = highlight.and_then(|function| function.call0(&prism).map_err(|err| describe_js(&err))) {
        log::error!("Prism.highlightAll failed: {reason}");
    }
}
