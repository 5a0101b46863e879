//! Copy-to-clipboard button attached to one code block.
//!
//! The clipboard write itself is async and lives in the DOM layer; this
//! controller owns what happens around it: confirmation, the revert timer and
//! recoloring when the theme changes.

#[cfg(test)]
#[path = "copy_button_test.rs"]
mod copy_button_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::state::copy_button::{CopyFeedback, REVERT_DELAY_MS};
use crate::state::theme::Theme;
use crate::util::browser::BrowserError;
use crate::util::timer::{Scheduler, TimerSlot};

pub trait CopyView {
    /// Icon (from `feedback` and `theme`) and feedback label visibility.
    fn render(&self, feedback: CopyFeedback, theme: Theme);
}

pub struct CopyButton<V, S: Scheduler> {
    view: Rc<V>,
    scheduler: S,
    feedback: Rc<Cell<CopyFeedback>>,
    theme: Rc<Cell<Theme>>,
    revert: TimerSlot<S::Handle>,
}

impl<V, S> CopyButton<V, S>
where
    V: CopyView + 'static,
    S: Scheduler,
{
    pub fn new(view: Rc<V>, scheduler: S, theme: Theme) -> Self {
        view.render(CopyFeedback::Idle, theme);
        Self {
            view,
            scheduler,
            feedback: Rc::new(Cell::new(CopyFeedback::Idle)),
            theme: Rc::new(Cell::new(theme)),
            revert: TimerSlot::default(),
        }
    }

    pub fn feedback(&self) -> CopyFeedback {
        self.feedback.get()
    }

    /// Show the confirmation and (re)start the revert timer.
    pub fn confirm(&mut self) {
        self.feedback.set(CopyFeedback::Confirmed);
        self.view.render(CopyFeedback::Confirmed, self.theme.get());

        let view = Rc::clone(&self.view);
        let feedback = Rc::clone(&self.feedback);
        let theme = Rc::clone(&self.theme);
        let handle = self.scheduler.schedule(
            REVERT_DELAY_MS,
            Box::new(move || {
                feedback.set(CopyFeedback::Idle);
                view.render(CopyFeedback::Idle, theme.get());
            }),
        );
        self.revert.replace(handle);
    }

    /// Clipboard write failed; there is no visible error state.
    pub fn fail(&self, err: &BrowserError) {
        log::error!("copy failed: {err}");
    }

    /// Re-render the current icon in `theme`.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        self.view.render(self.feedback.get(), theme);
    }
}
