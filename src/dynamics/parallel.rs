use rayon::prelude::*;

use crate::core::{Bounds, EmitterConfig, Particle, SimulationConfig};
use crate::dynamics::emitter::{integrate_particle, needs_respawn};

/// Data-parallel gravity pass over a particle slice using Rayon.
///
/// Particles past the respawn line are left untouched and flagged in
/// `respawn`; drawing their new state is left to the caller so the random
/// stream stays sequential.
pub struct ParallelIntegrator;

impl ParallelIntegrator {
    pub fn integrate(
        particles: &mut [Particle],
        respawn: &mut [bool],
        config: &SimulationConfig,
        bounds: &Bounds,
        emitter: &EmitterConfig,
    ) {
        debug_assert_eq!(particles.len(), respawn.len());

        particles
            .par_iter_mut()
            .zip(respawn.par_iter_mut())
            .for_each(|(particle, flag)| {
                *flag = particle.is_active && needs_respawn(particle, emitter, bounds);
                if !*flag {
                    *particle = integrate_particle(particle, config);
                }
            });
    }
}
