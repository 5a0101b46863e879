//! Page-lifetime UI state for the documentation site.
//!
//! DESIGN
//! ======
//! Each enhancer owns a small state value with transition methods as its only
//! mutators. Nothing here touches the DOM, so every rule runs natively in
//! tests.

pub mod copy_button;
pub mod header;
pub mod language_menu;
pub mod side_menu;
pub mod theme;
