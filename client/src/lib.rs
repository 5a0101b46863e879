//! Progressive enhancement for the static documentation site.
//!
//! This crate is compiled to WebAssembly and loaded by every generated page.
//! It attaches the interactive chrome on top of server-rendered HTML: the
//! scroll-synchronized header, the inline search box, the slide-out menu, the
//! theme toggle, copy buttons on code blocks and the language popup. Pages
//! stay fully readable when the module fails to load.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Pure state machines and constants, no DOM access |
//! | [`components`] | Controllers generic over view and scheduler seams |
//! | [`util`] | Browser capability wrappers, URL building, timers |
//! | `dom` | `web-sys` views and the page boot sequence (`hydrate` only) |

pub mod components;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod state;
pub mod util;

/// WASM entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger already initialised: {err}").into());
    }
    if let Err(err) = dom::boot() {
        log::error!("page behaviors not attached: {err}");
    }
}
