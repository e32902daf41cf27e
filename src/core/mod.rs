//! Core types describing simulated bodies and the inputs that drive them.

pub mod body;
pub mod types;

pub use body::{Body, BodyState, Particle};
pub use types::{Bounds, Container, EmitterConfig, SimulationConfig, SimulationConfigBuilder};
