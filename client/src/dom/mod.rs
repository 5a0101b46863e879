//! Browser bindings: the `web-sys` side of every controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`boot`] runs once per page load and waits for the document to finish
//! parsing. The stored theme is applied first, before any copy icon is
//! rendered, so icons start out in the right palette. A component whose
//! elements are missing disables itself.

pub mod copy_buttons;
pub mod decorations;
pub mod elements;
pub mod events;
pub mod header;
pub mod language_menu;
pub mod side_menu;
pub mod theme;

use crate::util::browser::{BrowserError, document, window};

/// Attach every page behavior.
///
/// # Errors
///
/// Returns an error only when there is no window or document to attach to.
pub fn boot() -> Result<(), BrowserError> {
    let window = window()?;
    let document = document()?;

    let page = document.clone();
    events::when_ready(&document, move || {
        let copy_buttons = copy_buttons::CopyButtons::default();
        let side_menu = side_menu::wire(&page);
        let loaded = theme::wire(&page, &copy_buttons, side_menu);
        copy_buttons.set_theme(loaded);

        header::wire(&window, &page);
        language_menu::wire(&window, &page);
        decorations::wrap_top_link_letters(&page);
        decorations::wire_breadcrumbs(&page);
        decorations::wire_search_bars(&page);
        copy_buttons.attach_all(&page);
        decorations::highlight_code(&window);
        log::info!("page behaviors attached");
    });
    Ok(())
}
