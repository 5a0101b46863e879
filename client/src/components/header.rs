//! Scroll-synchronized header and the search box nested in its lower tier.
//!
//! SYSTEM CONTEXT
//! ==============
//! The scroll handler and the search icon both drive one [`HeaderState`].
//! Scroll may force an open search box closed at any time; there is no lock
//! against it. The only deferred work is the focus call after expansion, held
//! in a [`TimerSlot`] so a newer expand or any collapse cancels it.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use std::rc::Rc;

use crate::state::header::{HeaderState, SearchAffordance};
use crate::util::timer::{Scheduler, TimerSlot};

/// Delay before focusing the search input, after the expand transition ends.
pub const FOCUS_DELAY_MS: u32 = 180;

/// DOM writes the header controller needs.
pub trait HeaderView {
    /// Rendered height of the primary tier, in px.
    fn top_header_height(&self) -> f64;
    /// Lift both tiers by `translate` px.
    fn apply_translate(&self, translate: f64);
    /// Empty the search input that lives in the primary tier.
    fn clear_top_search(&self);
    /// Reflect `affordance` in classes and `aria-hidden`.
    fn render_search(&self, affordance: SearchAffordance);
    fn clear_search_input(&self);
    /// Focus the search input with the caret after any existing text.
    fn focus_search_input(&self);
}

pub struct HeaderController<V, S: Scheduler> {
    state: HeaderState,
    view: Rc<V>,
    scheduler: S,
    focus_timer: TimerSlot<S::Handle>,
}

impl<V, S> HeaderController<V, S>
where
    V: HeaderView + 'static,
    S: Scheduler,
{
    pub fn new(view: Rc<V>, scheduler: S) -> Self {
        let state = HeaderState::new(view.top_header_height());
        Self { state, view, scheduler, focus_timer: TimerSlot::default() }
    }

    pub fn state(&self) -> &HeaderState {
        &self.state
    }

    /// Re-measure the primary tier after a viewport resize.
    pub fn on_resize(&mut self) {
        self.state.set_top_header_height(self.view.top_header_height());
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        let outcome = self.state.on_scroll(scroll_y);
        self.view.apply_translate(outcome.translate);
        if outcome.clear_top_search {
            self.view.clear_top_search();
        }
        if outcome.discard_draft {
            self.focus_timer.cancel();
            self.view.clear_search_input();
        }
        if outcome.affordance_changed {
            self.view.render_search(self.state.affordance());
        }
    }

    /// Search icon activation: open when closed, close when open.
    pub fn toggle_search(&mut self) {
        if self.state.affordance() == SearchAffordance::Expanded {
            self.collapse_search();
        } else {
            self.expand_search();
        }
    }

    /// Open the search box and focus its input after [`FOCUS_DELAY_MS`].
    ///
    /// No-op while already open; the pending focus call is left alone.
    pub fn expand_search(&mut self) {
        if !self.state.expand_search() {
            return;
        }
        self.view.render_search(self.state.affordance());
        let view = Rc::clone(&self.view);
        let handle = self
            .scheduler
            .schedule(FOCUS_DELAY_MS, Box::new(move || view.focus_search_input()));
        self.focus_timer.replace(handle);
    }

    /// Close the search box, discarding the typed query.
    pub fn collapse_search(&mut self) {
        if !self.state.collapse_search() {
            return;
        }
        self.focus_timer.cancel();
        self.view.render_search(self.state.affordance());
        self.view.clear_search_input();
    }
}
