use log::{log_enabled, warn, Level};
use std::fmt;
use std::time::{Duration, Instant};

/// The two passes of a fountain tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickPhase {
    /// Gravity pass over every particle, flagging the ones past the line.
    Integrate,
    /// Relaunch of the flagged particles from the emitter.
    Respawn,
}

impl fmt::Display for TickPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TickPhase::Integrate => "integrate",
            TickPhase::Respawn => "respawn",
        })
    }
}

/// Traces how long one phase of a tick took, and over how many particles,
/// when it goes out of scope.
pub struct PhaseTimer {
    phase: TickPhase,
    tick: u64,
    particles: usize,
    start: Instant,
}

impl PhaseTimer {
    pub fn new(phase: TickPhase, tick: u64, particles: usize) -> Self {
        Self {
            phase,
            tick,
            particles,
            start: Instant::now(),
        }
    }

    pub fn phase(&self) -> TickPhase {
        self.phase
    }
}

impl Drop for PhaseTimer {
    fn drop(&mut self) {
        if log_enabled!(Level::Trace) {
            log::trace!(
                "tick {} {}: {} particles in {} µs",
                self.tick,
                self.phase,
                self.particles,
                self.start.elapsed().as_micros()
            );
        }
    }
}

/// Warns when a frame's tick took longer than the frame budget. Returns
/// whether it did.
pub fn warn_if_frame_budget_exceeded(duration: Duration, budget_ms: f32) -> bool {
    let elapsed_ms = duration.as_secs_f32() * 1000.0;
    if elapsed_ms > budget_ms {
        warn!(
            "tick took {:.2} ms, over the {:.2} ms frame budget",
            elapsed_ms, budget_ms
        );
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_log_under_their_pass_names() {
        assert_eq!(TickPhase::Integrate.to_string(), "integrate");
        assert_eq!(TickPhase::Respawn.to_string(), "respawn");

        let timer = PhaseTimer::new(TickPhase::Respawn, 3, 15);
        assert_eq!(timer.phase(), TickPhase::Respawn);
    }

    #[test]
    fn budget_overrun_is_reported() {
        assert!(warn_if_frame_budget_exceeded(Duration::from_millis(20), 16.67));
        assert!(!warn_if_frame_budget_exceeded(Duration::from_millis(5), 16.67));
    }
}
