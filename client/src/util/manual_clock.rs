//! Virtual-clock scheduler for native tests.
//!
//! Callbacks only run from [`ManualScheduler::advance`], in due order, with the
//! queue unborrowed so a callback may schedule further work.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::timer::Scheduler;

struct Entry {
    due_ms: u64,
    seq: u64,
    cancelled: Rc<Cell<bool>>,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Queue {
    now_ms: u64,
    next_seq: u64,
    entries: Vec<Entry>,
    fired: usize,
}

#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

/// Cancels its entry when dropped.
pub struct ManualHandle {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle {
        let cancelled = Rc::new(Cell::new(false));
        let mut queue = self.queue.borrow_mut();
        let seq = queue.next_seq;
        queue.next_seq += 1;
        let due_ms = queue.now_ms + u64::from(delay_ms);
        queue.entries.push(Entry { due_ms, seq, cancelled: Rc::clone(&cancelled), callback });
        ManualHandle { cancelled }
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.queue.borrow().now_ms
    }

    /// Number of callbacks still waiting to fire.
    pub fn pending(&self) -> usize {
        self.queue
            .borrow()
            .entries
            .iter()
            .filter(|entry| !entry.cancelled.get())
            .count()
    }

    /// Number of callbacks that have run so far.
    pub fn fired(&self) -> usize {
        self.queue.borrow().fired
    }

    /// Move the clock forward by `ms`, running every callback that comes due.
    pub fn advance(&self, ms: u64) {
        let target = self.queue.borrow().now_ms + ms;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                queue.entries.retain(|entry| !entry.cancelled.get());
                let index = queue
                    .entries
                    .iter()
                    .enumerate()
                    .filter(|(_, entry)| entry.due_ms <= target)
                    .min_by_key(|(_, entry)| (entry.due_ms, entry.seq))
                    .map(|(index, _)| index);
                match index {
                    Some(index) => {
                        let entry = queue.entries.remove(index);
                        queue.now_ms = entry.due_ms;
                        queue.fired += 1;
                        Some(entry.callback)
                    }
                    None => None,
                }
            };
            match next {
                Some(callback) => callback(),
                None => break,
            }
        }
        self.queue.borrow_mut().now_ms = target;
    }
}
