//! Element lookup and class/attribute writes that log instead of throwing.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::util::browser::describe_js;

/// Element with `id`, cast to `T`.
pub fn by_id<T: JsCast + Clone>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_ref::<T>().cloned()
}

/// `element` as a text input, or `None` when it is some other tag.
pub fn as_input(element: Element) -> Option<HtmlInputElement> {
    match element.dyn_into::<HtmlInputElement>() {
        Ok(input) => Some(input),
        Err(other) => {
            log::debug!("<{}> is not an input", other.tag_name().to_lowercase());
            None
        }
    }
}

/// First match of `selector` under `root`.
pub fn query(root: &Element, selector: &str) -> Option<Element> {
    match root.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::debug!("bad selector {selector}: {}", describe_js(&err));
            None
        }
    }
}

/// Every match of `selector` in the document, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::debug!("bad selector {selector}: {}", describe_js(&err));
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        log::debug!("class {class} not toggled: {}", describe_js(&err));
    }
}

pub fn set_attr(element: &Element, name: &str, value: &str) {
    if let Err(err) = element.set_attribute(name, value) {
        log::debug!("attribute {name} not set: {}", describe_js(&err));
    }
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        log::debug!("style {property} not set: {}", describe_js(&err));
    }
}

/// Trimmed text content of `element`.
pub fn text_of(element: &Element) -> String {
    element.text_content().unwrap_or_default().trim().to_owned()
}
