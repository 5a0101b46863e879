//! Language switcher popup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opening sets `display` first and the `active` class a tick later; closing
//! does the reverse with a longer fade. One phase timer per popup means a
//! toggle that lands mid-fade cancels the stale half of the animation.

#[cfg(test)]
#[path = "language_menu_test.rs"]
mod language_menu_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::state::language_menu::{ACTIVATE_DELAY_MS, HIDE_DELAY_MS, PopupPhase};
use crate::util::nav::language_href;
use crate::util::timer::{Scheduler, TimerSlot};

pub trait PopupView {
    fn set_displayed(&self, displayed: bool);
    fn set_active(&self, active: bool);
}

pub struct LanguageMenu<V, S: Scheduler> {
    view: Rc<V>,
    scheduler: S,
    phase: Rc<Cell<PopupPhase>>,
    phase_timer: TimerSlot<S::Handle>,
}

impl<V, S> LanguageMenu<V, S>
where
    V: PopupView + 'static,
    S: Scheduler,
{
    pub fn new(view: Rc<V>, scheduler: S) -> Self {
        Self { view, scheduler, phase: Rc::new(Cell::new(PopupPhase::Hidden)), phase_timer: TimerSlot::default() }
    }

    pub fn phase(&self) -> PopupPhase {
        self.phase.get()
    }

    /// Icon activation.
    pub fn toggle(&mut self) {
        if self.phase.get().is_showing() {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn open(&mut self) {
        self.view.set_displayed(true);
        self.phase.set(PopupPhase::Opening);
        let view = Rc::clone(&self.view);
        let phase = Rc::clone(&self.phase);
        let handle = self.scheduler.schedule(
            ACTIVATE_DELAY_MS,
            Box::new(move || {
                view.set_active(true);
                phase.set(PopupPhase::Open);
            }),
        );
        self.phase_timer.replace(handle);
    }

    pub fn close(&mut self) {
        self.view.set_active(false);
        self.phase.set(PopupPhase::Closing);
        let view = Rc::clone(&self.view);
        let phase = Rc::clone(&self.phase);
        let handle = self.scheduler.schedule(
            HIDE_DELAY_MS,
            Box::new(move || {
                view.set_displayed(false);
                phase.set(PopupPhase::Hidden);
            }),
        );
        self.phase_timer.replace(handle);
    }

    /// A click landed outside the popup and its icon.
    pub fn on_outside_click(&mut self) {
        if self.phase.get().is_showing() {
            self.close();
        }
    }

    /// Close the popup and return the target for switching the page at
    /// `current_path` to `lang`.
    pub fn select(&mut self, current_path: &str, lang: &str) -> Option<String> {
        if self.phase.get().is_showing() {
            self.close();
        }
        let href = language_href(current_path, lang);
        if href.is_none() {
            log::debug!("no locale segment in {current_path}, staying put");
        }
        href
    }
}
