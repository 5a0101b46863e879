//! Behavior controllers for the site chrome.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each controller is generic over a narrow view trait (its DOM writes) and,
//! where it defers work, a [`crate::util::timer::Scheduler`]. The `dom` module
//! supplies the browser implementations; tests supply recording fakes.

pub mod copy_button;
pub mod header;
pub mod language_menu;
pub mod side_menu;
pub mod theme_toggle;
