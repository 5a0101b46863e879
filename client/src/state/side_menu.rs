//! Side-menu open flag and the scroll arithmetic used while it is open.
//!
//! While the panel is open, wheel, touch-drag and navigation keys scroll the
//! panel instead of the page. The helpers here turn those inputs into panel
//! scroll targets; the DOM layer applies them.

#[cfg(test)]
#[path = "side_menu_test.rs"]
mod side_menu_test;

/// Arrow-key scroll step, in px.
pub const KEY_SCROLL_STEP: f64 = 40.0;

/// Fraction of the panel height scrolled by PageUp/PageDown.
pub const PAGE_SCROLL_RATIO: f64 = 0.6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SideMenuState {
    pub open: bool,
}

impl SideMenuState {
    /// Flip the open flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }
}

/// How a forwarded input moves the panel's scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanelScroll {
    By(f64),
    To(f64),
}

impl PanelScroll {
    /// Resulting offset from `current`, not clamped; the browser clamps.
    pub fn apply(self, current: f64) -> f64 {
        match self {
            Self::By(delta) => current + delta,
            Self::To(offset) => offset,
        }
    }
}

/// PageUp/PageDown step for a panel `viewport_height` px tall.
pub fn page_step(viewport_height: f64) -> f64 {
    (viewport_height * PAGE_SCROLL_RATIO).round().max(KEY_SCROLL_STEP)
}

/// Panel scroll for a navigation key, or `None` when the key is not forwarded.
pub fn key_scroll(key: &str, viewport_height: f64, content_height: f64) -> Option<PanelScroll> {
    match key {
        "ArrowDown" => Some(PanelScroll::By(KEY_SCROLL_STEP)),
        "ArrowUp" => Some(PanelScroll::By(-KEY_SCROLL_STEP)),
        "PageDown" => Some(PanelScroll::By(page_step(viewport_height))),
        "PageUp" => Some(PanelScroll::By(-page_step(viewport_height))),
        "Home" => Some(PanelScroll::To(0.0)),
        "End" => Some(PanelScroll::To(content_height)),
        _ => None,
    }
}

/// Tracks the last touch point so each move scrolls by the finger's travel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchDrag {
    last_y: f64,
}

impl TouchDrag {
    pub fn start(&mut self, y: f64) {
        self.last_y = y;
    }

    /// Scroll delta for a move to `y`; `None` when the finger did not move.
    pub fn drag_to(&mut self, y: f64) -> Option<f64> {
        let delta = self.last_y - y;
        if delta.abs() > 0.0 {
            self.last_y = y;
            Some(delta)
        } else {
            None
        }
    }
}
