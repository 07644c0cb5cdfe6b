// src/animation/scheduler.rs
//
// Fixed-period tick source driven by frame time.
// Time left over after a tick carries into the next period; a stall longer
// than two periods still yields a single tick, missed ones are dropped.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TickScheduler {
    period: Duration,
    elapsed: Duration,
    running: bool,
}

impl TickScheduler {
    pub fn new(period: Duration) -> Self {
        assert!(!period.is_zero(), "tick period must be non-zero");
        Self {
            period,
            elapsed: Duration::ZERO,
            running: false,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns true if this call started the scheduler.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.elapsed = Duration::ZERO;
        true
    }

    /// Returns true if this call stopped the scheduler.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        self.elapsed = Duration::ZERO;
        true
    }

    /// Feeds `dt` of wall time. Reports whether a tick is due; at most one per call.
    pub fn poll(&mut self, dt: Duration) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.period {
            self.elapsed -= self.period;
            if self.elapsed >= self.period {
                self.elapsed = Duration::ZERO;
            }
            true
        } else {
            false
        }
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::from_millis(20)
    }
}
