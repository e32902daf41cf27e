//! Frame Physics – frame-stepped motion for UI animations.
//!
//! This crate advances a falling, bouncing body and a particle fountain by
//! one fixed tick per rendered frame. The host owns scheduling and
//! rendering: it calls [`Simulation::advance_tick`] from its frame callback
//! and applies the resulting positions as translations.

pub mod config;
pub mod core;
pub mod dynamics;
pub mod utils;
pub mod world;

pub use glam::DVec2;

pub use core::{
    body::{Body, BodyState, Particle},
    types::{Bounds, Container, EmitterConfig, SimulationConfig, SimulationConfigBuilder},
};
pub use dynamics::{
    emitter::{spawn, step_particle},
    integrator::{step, step_with_contact, FloorContact},
};
pub use utils::profiling::FrameStats;
pub use world::{
    BouncingBall, FrameDriver, FrameSink, NullSink, ParticleFountain, SharedConfig, Simulation,
};
