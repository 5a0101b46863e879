//! Utility helpers shared across the enhancer modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser capabilities (storage, clipboard, timers,
//! navigation) from controller logic so the logic stays testable natively.

pub mod browser;
#[cfg(test)]
pub mod manual_clock;
pub mod nav;
pub mod storage;
pub mod text;
pub mod timer;
