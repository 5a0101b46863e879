//! Capability wrappers around optional browser APIs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Smooth scroll, storage, clipboard and navigation can each be missing or
//! refused by the browser. Every wrapper here returns a `Result` so call sites
//! must pick their fallback explicitly instead of relying on a swallowed
//! exception.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Failure of an optional browser capability.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BrowserError {
    #[error("no window object")]
    NoWindow,
    #[error("no document object")]
    NoDocument,
    #[error("local storage unavailable")]
    StorageUnavailable,
    #[error("storage write rejected: {0}")]
    StorageWrite(String),
    #[error("clipboard unavailable")]
    ClipboardUnavailable,
    #[error("clipboard write denied: {0}")]
    ClipboardDenied(String),
    #[error("scroll options unsupported: {0}")]
    ScrollUnsupported(String),
    #[error("navigation to {href} failed: {reason}")]
    Navigation { href: String, reason: String },
    #[error("dom operation failed: {0}")]
    Dom(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for BrowserError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(describe_js(&value))
    }
}

/// Render a thrown JS value for log lines and error payloads.
#[cfg(feature = "hydrate")]
pub fn describe_js(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(feature = "hydrate")]
pub fn window() -> Result<web_sys::Window, BrowserError> {
    web_sys::window().ok_or(BrowserError::NoWindow)
}

#[cfg(feature = "hydrate")]
pub fn document() -> Result<web_sys::Document, BrowserError> {
    window()?.document().ok_or(BrowserError::NoDocument)
}

/// Scroll the page to the top using the options form of `scrollTo`.
///
/// Older engines throw on the options object; the caller falls back to
/// [`jump_to_top`].
#[cfg(feature = "hydrate")]
pub fn scroll_to_top() -> Result<(), BrowserError> {
    use js_sys::{Function, Object, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    let window = window()?;
    let unsupported = |value: JsValue| BrowserError::ScrollUnsupported(describe_js(&value));

    let scroll_to = Reflect::get(&window, &JsValue::from_str("scrollTo"))
        .map_err(unsupported)?
        .dyn_into::<Function>()
        .map_err(unsupported)?;
    let options = Object::new();
    Reflect::set(&options, &JsValue::from_str("top"), &JsValue::from_f64(0.0)).map_err(unsupported)?;
    Reflect::set(&options, &JsValue::from_str("left"), &JsValue::from_f64(0.0)).map_err(unsupported)?;
    Reflect::set(&options, &JsValue::from_str("behavior"), &JsValue::from_str("auto")).map_err(unsupported)?;
    scroll_to.call1(&window, &options).map_err(unsupported)?;
    Ok(())
}

/// Immediate `scrollTo(0, 0)`.
#[cfg(feature = "hydrate")]
pub fn jump_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Point the browser at `href`.
#[cfg(feature = "hydrate")]
pub fn navigate(href: &str) -> Result<(), BrowserError> {
    window()?
        .location()
        .set_href(href)
        .map_err(|value| BrowserError::Navigation { href: href.to_owned(), reason: describe_js(&value) })
}

/// Navigate, logging instead of surfacing a refusal.
#[cfg(feature = "hydrate")]
pub fn navigate_or_log(href: &str) {
    if let Err(err) = navigate(href) {
        log::warn!("{err}");
    }
}

/// Write `text` to the system clipboard.
///
/// `navigator.clipboard` is undefined outside secure contexts, so it is read
/// reflectively rather than through the typed getter.
#[cfg(feature = "hydrate")]
pub async fn write_clipboard(text: &str) -> Result<(), BrowserError> {
    use wasm_bindgen::{JsCast, JsValue};

    let navigator = window()?.navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|_| BrowserError::ClipboardUnavailable)?
        .dyn_into::<web_sys::Clipboard>()
        .map_err(|_| BrowserError::ClipboardUnavailable)?;
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|value| BrowserError::ClipboardDenied(describe_js(&value)))
}
