//! Navigation targets built from user input and the current location.
//!
//! All helpers are pure so the URL contract (search query, locale switch,
//! breadcrumb prefix) is tested without a browser.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters `encodeURIComponent` leaves untouched besides alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Locale used when the document does not declare one.
pub const DEFAULT_LANG: &str = "es";

pub const SEARCH_PAGE: &str = "/search.html";

/// Percent-encode one URI component.
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// Search results URL for a raw query, or `None` when the query is blank.
pub fn search_href(raw_query: &str) -> Option<String> {
    let query = raw_query.trim();
    if query.is_empty() {
        return None;
    }
    Some(format!("{SEARCH_PAGE}?q={}", encode_component(query)))
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Leading locale segment of `path`, if any.
pub fn current_language(path: &str) -> Option<&str> {
    segments(path).next()
}

/// Same page under `new_lang`: only the leading locale segment changes.
///
/// Returns `None` for a path with no segments.
pub fn language_href(path: &str, new_lang: &str) -> Option<String> {
    let mut parts = segments(path);
    parts.next()?;
    let rest = parts.collect::<Vec<_>>().join("/");
    Some(format!("/{new_lang}/{rest}"))
}

/// Target of the breadcrumb at `index`: the encoded labels up to and including it.
pub fn breadcrumb_href(lang: &str, labels: &[String], index: usize) -> Option<String> {
    if index >= labels.len() {
        return None;
    }
    let lang = if lang.trim().is_empty() { DEFAULT_LANG } else { lang.trim() };
    let prefix = labels[..=index]
        .iter()
        .map(|label| encode_component(label.trim()))
        .collect::<Vec<_>>()
        .join("/");
    Some(format!("/{lang}/{prefix}"))
}
