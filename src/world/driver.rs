use std::time::Instant;

use crate::config::DEFAULT_FRAME_BUDGET_MS;
use crate::utils::logging::warn_if_frame_budget_exceeded;
use crate::world::Simulation;

/// Receives the simulation after every tick, typically to copy positions
/// into visual transforms.
pub trait FrameSink<S: ?Sized> {
    fn present(&mut self, simulation: &S);
}

impl<S: ?Sized, F> FrameSink<S> for F
where
    F: FnMut(&S),
{
    fn present(&mut self, simulation: &S) {
        self(simulation)
    }
}

/// Sink that ignores every frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl<S: ?Sized> FrameSink<S> for NullSink {
    fn present(&mut self, _simulation: &S) {}
}

/// Explicit frame loop: advance one tick, then hand the result to a sink.
///
/// The driver is agnostic of what schedules it (display link, timer, or a
/// plain loop); each [`FrameDriver::run_frame`] call is one frame.
#[derive(Debug, Clone)]
pub struct FrameDriver<S> {
    simulation: S,
    frame_budget_ms: f32,
    frames: u64,
    overruns: u64,
}

impl<S: Simulation> FrameDriver<S> {
    pub fn new(simulation: S) -> Self {
        Self {
            simulation,
            frame_budget_ms: DEFAULT_FRAME_BUDGET_MS,
            frames: 0,
            overruns: 0,
        }
    }

    pub fn with_frame_budget(mut self, budget_ms: f32) -> Self {
        self.frame_budget_ms = budget_ms;
        self
    }

    /// Runs a single frame. Returns `false` when the simulation is paused
    /// and nothing was presented.
    pub fn run_frame<K: FrameSink<S>>(&mut self, sink: &mut K) -> bool {
        if !self.simulation.is_running() {
            return false;
        }

        let start = Instant::now();
        self.simulation.advance_tick();
        if warn_if_frame_budget_exceeded(start.elapsed(), self.frame_budget_ms) {
            self.overruns += 1;
        }

        sink.present(&self.simulation);
        self.frames += 1;
        true
    }

    /// Runs up to `frames` frames, stopping early once the simulation is
    /// paused. Returns how many frames were presented.
    pub fn run<K: FrameSink<S>>(&mut self, frames: u64, sink: &mut K) -> u64 {
        let mut presented = 0;
        for _ in 0..frames {
            if !self.run_frame(sink) {
                break;
            }
            presented += 1;
        }
        presented
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn overruns(&self) -> u64 {
        self.overruns
    }

    pub fn simulation(&self) -> &S {
        &self.simulation
    }

    pub fn simulation_mut(&mut self) -> &mut S {
        &mut self.simulation
    }

    pub fn into_inner(self) -> S {
        self.simulation
    }
}
