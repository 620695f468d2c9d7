//! Tick sources for measured updates.
//!
//! The engine is normally driven with an explicit delta. When the host only
//! has a millisecond counter, `Engine::update_from` reads a [`TickSource`] and
//! derives the delta from the previous reading, tolerating counter wrap.

use std::cell::Cell;
use std::time::Instant;

/// A free-running millisecond counter.
pub trait TickSource {
    fn now_ms(&self) -> u32;
}

/// Milliseconds between two counter readings, across a `u32` wrap.
#[inline]
pub fn tick_elapsed(prev_ms: u32, now_ms: u32) -> u32 {
    now_ms.wrapping_sub(prev_ms)
}

/// Monotonic wall clock counting from its creation.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for SystemClock {
    fn now_ms(&self) -> u32 {
        // Truncation wraps like a hardware tick counter.
        self.origin.elapsed().as_millis() as u32
    }
}

/// Counter advanced by hand; for tests and simulated time.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u32>,
}

impl ManualClock {
    pub fn new(start_ms: u32) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }

    pub fn set(&self, ms: u32) {
        self.now.set(ms);
    }
}

impl TickSource for ManualClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}
