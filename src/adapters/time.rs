//! Wall-clock adapter.

use std::thread;
use std::time::Duration;

use crate::app::ports::Clock;

/// [`Clock`] backed by `std::thread::sleep`.
pub struct StdClock;

impl StdClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for StdClock {
    fn sleep_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
