use std::thread;
use std::time::{Duration, Instant};

/// Paces the host loop: one instruction slot per `1 / cpu_hz` seconds and a
/// timer tick every `cpu_hz / timer_hz` slots.
#[derive(Debug, Clone)]
pub struct Clock {
    slot: Duration,
    timer_period: f64,
    timer_count: f64,
}

impl Clock {
    pub fn new(cpu_hz: f64, timer_hz: f64) -> Self {
        Clock {
            slot: Duration::from_secs_f64(1.0 / cpu_hz),
            timer_period: cpu_hz / timer_hz,
            timer_count: 0.0,
        }
    }

    pub fn slot(&self) -> Duration {
        self.slot
    }

    /// Counts one instruction slot and returns how many timer ticks fell
    /// inside it. More than one when `timer_hz` exceeds `cpu_hz`.
    pub fn advance(&mut self) -> u32 {
        self.timer_count += 1.0;
        let mut ticks = 0;
        while self.timer_count >= self.timer_period {
            self.timer_count -= self.timer_period;
            ticks += 1;
        }
        ticks
    }

    /// Sleeps out whatever is left of the slot that began at `started`.
    pub fn wait(&self, started: Instant) {
        if let Some(remaining) = self.slot.checked_sub(started.elapsed()) {
            thread::sleep(remaining);
        }
    }
}
