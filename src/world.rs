//! Host-facing simulations and the frame loop that drives them.

pub mod bouncing_ball;
pub mod driver;
pub mod fountain;
pub mod shared_config;

pub use bouncing_ball::BouncingBall;
pub use driver::{FrameDriver, FrameSink, NullSink};
pub use fountain::ParticleFountain;
pub use shared_config::SharedConfig;

use crate::utils::profiling::FrameStats;

/// Per-frame contract between a host rendering loop and a simulation.
pub trait Simulation {
    /// Advances exactly one tick. Does nothing while paused.
    fn advance_tick(&mut self);

    /// Restores the initial state. Does not change the paused flag.
    fn reset(&mut self);

    fn is_running(&self) -> bool;

    fn set_running(&mut self, running: bool);

    fn stats(&self) -> &FrameStats;

    fn pause(&mut self) {
        self.set_running(false);
    }

    fn resume(&mut self) {
        self.set_running(true);
    }
}
