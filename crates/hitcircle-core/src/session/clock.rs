//! Clock abstraction for the session driver.
//!
//! The session never reads time on its own; a `Clock` is handed to each tick,
//! so tests and headless runs can drive time explicitly.

use std::cell::Cell;
use std::time::Instant;

/// Source of the session's elapsed time.
pub trait Clock {
    /// Milliseconds since the session started. Must never decrease.
    fn elapsed_ms(&self) -> i64;
}

/// Wall clock started at construction, shifted by the audio offset.
#[derive(Debug, Clone)]
pub struct SystemClock {
    started: Instant,
    offset_ms: i64,
}

impl SystemClock {
    pub fn start(offset_ms: i64) -> Self {
        Self {
            started: Instant::now(),
            offset_ms,
        }
    }
}

impl Clock for SystemClock {
    fn elapsed_ms(&self) -> i64 {
        self.started.elapsed().as_millis() as i64 + self.offset_ms
    }
}

/// Manually stepped clock for tests and headless playback.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<i64>,
}

impl ManualClock {
    pub fn new(start_ms: i64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    /// Move to `ms`; earlier values are ignored.
    pub fn set(&self, ms: i64) {
        self.now.set(self.now.get().max(ms));
    }

    pub fn advance(&self, dt_ms: i64) {
        self.set(self.now.get() + dt_ms.max(0));
    }
}

impl Clock for ManualClock {
    fn elapsed_ms(&self) -> i64 {
        self.now.get()
    }
}
