//! Language popup visibility phases.
//!
//! DESIGN
//! ======
//! `display` and the `active` animation class change at different moments so
//! the popup can fade in and out. Tracking the in-between phases lets a toggle
//! that lands mid-animation reverse direction cleanly.

#[cfg(test)]
#[path = "language_menu_test.rs"]
mod language_menu_test;

/// Delay between `display:block` and adding `active`, so the entry transition runs.
pub const ACTIVATE_DELAY_MS: u32 = 10;

/// Delay between removing `active` and `display:none`, so the fade-out finishes.
pub const HIDE_DELAY_MS: u32 = 150;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PopupPhase {
    #[default]
    Hidden,
    Opening,
    Open,
    Closing,
}

impl PopupPhase {
    /// Heading toward (or at) the visible state.
    pub fn is_showing(self) -> bool {
        matches!(self, Self::Opening | Self::Open)
    }

    /// Whether `display` is anything but `none` in this phase.
    pub fn is_displayed(self) -> bool {
        self != Self::Hidden
    }

    /// Whether the `active` class is present in this phase.
    pub fn is_active(self) -> bool {
        self == Self::Open
    }
}
