//! Utility helpers: numeric guards, logging timers, and frame statistics.

pub mod logging;
pub mod math;
pub mod profiling;

pub use logging::{warn_if_frame_budget_exceeded, PhaseTimer, TickPhase};
pub use math::*;
pub use profiling::{FrameStats, ScopedDuration};
