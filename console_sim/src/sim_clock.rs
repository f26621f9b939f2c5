use std::thread::sleep;
use std::time::{Duration, Instant};

use pack_monitor::bsp::clock::Clock;

pub struct SimClock {
    start: Instant,
}

impl SimClock {
    pub fn create() -> SimClock {
        return SimClock {
            start: Instant::now(),
        };
    }
}

impl Clock for SimClock {
    fn millis(&self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }

    /// The debounce delay blocks the whole loop, same as on the board
    fn delay_ms(&self, ms: u32) {
        sleep(Duration::from_millis(ms as u64));
    }
}
