use glam::DVec2;
use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::DEFAULT_PARTICLE_COUNT;
use crate::core::{Bounds, EmitterConfig, Particle, SimulationConfig};
use crate::dynamics::emitter::{integrate_particle, needs_respawn, spawn};
use crate::utils::logging::{PhaseTimer, TickPhase};
use crate::utils::profiling::{FrameStats, ScopedDuration};
use crate::world::{SharedConfig, Simulation};

/// Independent particles launched upward from one emitter and recycled once
/// they fall past the respawn line.
///
/// Each tick runs in two passes: a gravity pass that touches every particle
/// on its own (parallel when enabled), then a respawn pass in index order
/// that draws from the fountain's random source. For a given seed the
/// trajectory is the same whether or not the first pass runs in parallel.
#[derive(Debug, Clone)]
pub struct ParticleFountain<R = SmallRng> {
    particles: Vec<Particle>,
    respawn: Vec<bool>,
    config: SharedConfig,
    emitter: EmitterConfig,
    bounds: Bounds,
    rng: R,
    parallel_enabled: bool,
    running: bool,
    stats: FrameStats,
}

impl ParticleFountain<SmallRng> {
    /// Fountain with the stock particle count, centred in `bounds`.
    pub fn new(bounds: Bounds) -> Self {
        Self::with_rng(
            DEFAULT_PARTICLE_COUNT,
            SharedConfig::new(SimulationConfig::particle_fountain()),
            bounds,
            EmitterConfig::centered(bounds),
            SmallRng::from_entropy(),
        )
    }

    /// Reproducible fountain, handy for tests and benchmarks.
    pub fn seeded(
        count: usize,
        config: SharedConfig,
        bounds: Bounds,
        emitter: EmitterConfig,
        seed: u64,
    ) -> Self {
        Self::with_rng(count, config, bounds, emitter, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ParticleFountain<R> {
    pub fn with_rng(
        count: usize,
        config: SharedConfig,
        bounds: Bounds,
        emitter: EmitterConfig,
        mut rng: R,
    ) -> Self {
        let launch = emitter.with_speed(config.current().speed_multiplier);
        let particles = (0..count).map(|_| spawn(&launch, &mut rng)).collect();

        Self {
            particles,
            respawn: vec![false; count],
            config,
            emitter,
            bounds,
            rng,
            parallel_enabled: false,
            running: true,
            stats: FrameStats::default(),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn positions(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.particles.iter().map(|particle| particle.position)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn emitter(&self) -> &EmitterConfig {
        &self.emitter
    }

    pub fn config(&self) -> &SharedConfig {
        &self.config
    }

    /// Layout callback. An emitter centred in the old bounds follows the
    /// layout; one placed anywhere else stays put.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        if self.emitter.is_centered_in(self.bounds) {
            self.emitter = self.emitter.recentered(bounds);
            debug!(
                "fountain emitter moved to ({:.1}, {:.1})",
                self.emitter.spawn_point.x, self.emitter.spawn_point.y
            );
        }
        self.bounds = bounds;
    }

    pub fn set_emitter(&mut self, emitter: EmitterConfig) {
        self.emitter = emitter;
    }

    /// Enables the Rayon gravity pass. Has no effect without the
    /// `parallel` feature.
    pub fn set_parallel_enabled(&mut self, enabled: bool) {
        self.parallel_enabled = enabled;
    }

    pub fn parallel_enabled(&self) -> bool {
        cfg!(feature = "parallel") && self.parallel_enabled
    }

    fn integrate_pass(&mut self, config: &SimulationConfig) {
        #[cfg(feature = "parallel")]
        {
            if self.parallel_enabled {
                crate::dynamics::parallel::ParallelIntegrator::integrate(
                    &mut self.particles,
                    &mut self.respawn,
                    config,
                    &self.bounds,
                    &self.emitter,
                );
                return;
            }
        }

        for (particle, flag) in self.particles.iter_mut().zip(self.respawn.iter_mut()) {
            *flag = particle.is_active && needs_respawn(particle, &self.emitter, &self.bounds);
            if !*flag {
                *particle = integrate_particle(particle, config);
            }
        }
    }

    fn respawn_pass(&mut self, launch: &EmitterConfig) -> u64 {
        let mut respawned = 0;
        for (particle, flag) in self.particles.iter_mut().zip(self.respawn.iter_mut()) {
            if std::mem::take(flag) {
                *particle = spawn(launch, &mut self.rng);
                respawned += 1;
            }
        }
        respawned
    }
}

impl<R: Rng> Simulation for ParticleFountain<R> {
    fn advance_tick(&mut self) {
        if !self.running {
            return;
        }

        let config = self.config.current();
        let launch = self.emitter.with_speed(config.speed_multiplier);

        let tick = self.stats.ticks + 1;
        let count = self.particles.len();
        let mut integrate_time = self.stats.integrate_time;
        {
            let _timer = PhaseTimer::new(TickPhase::Integrate, tick, count);
            let _duration = ScopedDuration::new(&mut integrate_time);
            self.integrate_pass(&config);
        }
        self.stats.integrate_time = integrate_time;

        let respawned = {
            let _timer = PhaseTimer::new(TickPhase::Respawn, tick, count);
            self.respawn_pass(&launch)
        };

        self.stats.ticks += 1;
        self.stats.respawns += respawned;
    }

    fn reset(&mut self) {
        let launch = self.emitter.with_speed(self.config.current().speed_multiplier);
        for particle in &mut self.particles {
            *particle = spawn(&launch, &mut self.rng);
        }
        debug!("fountain reset, {} particles relaunched", self.particles.len());
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    fn stats(&self) -> &FrameStats {
        &self.stats
    }
}
