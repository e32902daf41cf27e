use std::fmt;
use std::time::{Duration, Instant};

/// Running counters for a simulation, reported through `log`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub ticks: u64,
    pub bounces: u64,
    pub rests: u64,
    pub respawns: u64,
    pub integrate_time: Duration,
}

impl FrameStats {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Mean time spent integrating per tick.
    pub fn mean_tick_time(&self) -> Duration {
        if self.ticks == 0 {
            return Duration::ZERO;
        }
        self.integrate_time / self.ticks.min(u32::MAX as u64) as u32
    }

    /// Logs the counters at `info`. Silent before the first tick.
    pub fn report(&self) {
        if self.ticks == 0 {
            return;
        }
        log::info!("{self}");
    }
}

impl fmt::Display for FrameStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ticks: {}, bounces: {}, rests: {}, respawns: {}, integration: {:.3} ms total, {:.1} µs per tick",
            self.ticks,
            self.bounces,
            self.rests,
            self.respawns,
            self.integrate_time.as_secs_f64() * 1000.0,
            self.mean_tick_time().as_secs_f64() * 1_000_000.0
        )
    }
}

/// Adds the elapsed time to `output` when dropped.
pub struct ScopedDuration<'a> {
    start: Instant,
    output: &'a mut Duration,
}

impl<'a> ScopedDuration<'a> {
    pub fn new(output: &'a mut Duration) -> Self {
        Self {
            start: Instant::now(),
            output,
        }
    }
}

impl<'a> Drop for ScopedDuration<'a> {
    fn drop(&mut self) {
        *self.output += self.start.elapsed();
    }
}
