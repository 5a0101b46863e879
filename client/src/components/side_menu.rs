//! Slide-out navigation panel with overlay and input forwarding.
//!
//! SYSTEM CONTEXT
//! ==============
//! While open, page scroll input is redirected into the panel. That
//! redirection is a single owned subscription value: created when the panel
//! opens, dropped when it closes. Repeated toggling can therefore never stack
//! or leak listeners.

#[cfg(test)]
#[path = "side_menu_test.rs"]
mod side_menu_test;

use crate::state::side_menu::SideMenuState;
use crate::util::browser::BrowserError;

/// DOM side of the side menu.
pub trait SideMenuView {
    /// Live input-forwarding registration; dropping it detaches the listeners.
    type Forwarding;

    /// Scroll the page to the top with the options-based primitive.
    fn scroll_page_to_top(&self) -> Result<(), BrowserError>;
    /// Immediate jump to the top, used when the primitive above fails.
    fn jump_page_to_top(&self);
    /// Panel, trigger, body and overlay classes plus `aria-expanded`.
    fn render_open(&self, open: bool);
    fn attach_forwarding(&self) -> Self::Forwarding;
    fn reset_panel_scroll(&self);
}

pub struct SideMenuController<V: SideMenuView> {
    state: SideMenuState,
    view: V,
    forwarding: Option<V::Forwarding>,
}

impl<V: SideMenuView> SideMenuController<V> {
    pub fn new(view: V) -> Self {
        Self { state: SideMenuState::default(), view, forwarding: None }
    }

    pub fn is_open(&self) -> bool {
        self.state.open
    }

    pub fn is_forwarding(&self) -> bool {
        self.forwarding.is_some()
    }

    /// Trigger activation.
    pub fn toggle(&mut self) {
        if self.state.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn open(&mut self) {
        if self.state.open {
            return;
        }
        if let Err(err) = self.view.scroll_page_to_top() {
            log::debug!("smooth scroll to top failed, jumping: {err}");
            self.view.jump_page_to_top();
        }
        self.state.toggle();
        self.view.render_open(true);
        self.forwarding = Some(self.view.attach_forwarding());
    }

    /// Close the panel. Safe to call while already closed.
    pub fn close(&mut self) {
        self.forwarding = None;
        self.state.open = false;
        self.view.reset_panel_scroll();
        self.view.render_open(false);
    }
}
