//! Per-particle update rule for the fountain.
//!
//! Vertical motion uses the same gravity step as the bouncing ball, the
//! horizontal axis just drifts. Instead of bouncing, a particle that dropped
//! past the respawn line is relaunched from the emitter.

use glam::DVec2;
use rand::Rng;

use crate::core::{Bounds, EmitterConfig, Particle, SimulationConfig};
use crate::dynamics::integrator::integrate_axis;
use crate::utils::math::{finite_or, finite_or_vec};

/// True when the particle sits below the respawn line.
#[inline]
pub fn needs_respawn(particle: &Particle, emitter: &EmitterConfig, bounds: &Bounds) -> bool {
    particle.position.y > emitter.respawn_line(bounds)
}

/// One gravity tick without any respawn handling.
pub fn integrate_particle(particle: &Particle, config: &SimulationConfig) -> Particle {
    if !particle.is_active {
        return *particle;
    }

    let (y, vy) = integrate_axis(
        particle.position.y,
        particle.velocity.y,
        config.effective_gravity(),
    );
    let (x, vx) = integrate_axis(particle.position.x, particle.velocity.x, 0.0);

    Particle {
        position: finite_or_vec(DVec2::new(x, y), particle.position),
        velocity: finite_or_vec(DVec2::new(vx, vy), DVec2::ZERO),
        is_active: particle.is_active,
    }
}

/// Fresh particle at the spawn point with a randomly drawn launch velocity.
///
/// `velocity.x` lies in `[-vx_max, vx_max]` and `velocity.y` in
/// `[-vy_max - jitter, -vy_max]`.
pub fn spawn<R: Rng + ?Sized>(emitter: &EmitterConfig, rng: &mut R) -> Particle {
    let vx_max = finite_or(emitter.vx_max.abs(), 0.0);
    let vy_max = finite_or(emitter.vy_max.abs(), 0.0);
    let jitter = finite_or(emitter.jitter.abs(), 0.0);

    let vx = if vx_max > 0.0 {
        rng.gen_range(-vx_max..=vx_max)
    } else {
        0.0
    };
    let vy = if jitter > 0.0 {
        -vy_max - rng.gen_range(0.0..=jitter)
    } else {
        -vy_max
    };

    Particle::new(emitter.spawn_point, DVec2::new(vx, vy))
}

/// Advances one particle by a tick, respawning it when it left the bounds.
pub fn step_particle<R: Rng + ?Sized>(
    particle: &Particle,
    config: &SimulationConfig,
    bounds: &Bounds,
    emitter: &EmitterConfig,
    rng: &mut R,
) -> Particle {
    if !particle.is_active {
        return *particle;
    }
    if needs_respawn(particle, emitter, bounds) {
        return spawn(emitter, rng);
    }
    integrate_particle(particle, config)
}
