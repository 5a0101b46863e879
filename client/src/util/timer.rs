//! Deferred one-shot callbacks with owned, cancel-on-drop handles.
//!
//! DESIGN
//! ======
//! Controllers never hold raw timeout ids. They ask a [`Scheduler`] for a
//! handle and park it in a [`TimerSlot`]; replacing or clearing the slot drops
//! the handle, and dropping the handle cancels the callback. Stale callbacks
//! therefore cannot fire after a newer activation has taken over.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

/// Source of deferred callbacks.
///
/// Dropping the returned handle must cancel the callback if it has not fired.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Holds at most one pending timer handle.
#[derive(Debug)]
pub struct TimerSlot<H> {
    pending: Option<H>,
}

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H> TimerSlot<H> {
    /// Store `handle`, cancelling whatever was held before.
    pub fn replace(&mut self, handle: H) {
        self.pending = Some(handle);
    }

    /// Cancel the held timer, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether a handle is currently held. A held handle may already have fired.
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

/// Browser scheduler backed by `setTimeout` via `gloo-timers`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle {
        gloo_timers::callback::Timeout::new(delay_ms, callback)
    }
}
