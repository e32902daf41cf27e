//! Simulation dynamics: the shared gravity step, floor contacts, and the
//! particle respawn rule.

pub mod emitter;
pub mod integrator;
#[cfg(feature = "parallel")]
pub mod parallel;

pub use emitter::{integrate_particle, needs_respawn, spawn, step_particle};
pub use integrator::{integrate_axis, resolve_floor, step, step_with_contact, FloorContact};
#[cfg(feature = "parallel")]
pub use parallel::ParallelIntegrator;
