use log::{debug, warn};

use crate::core::{Body, BodyState, Container, SimulationConfig};
use crate::dynamics::integrator::{step_with_contact, FloorContact};
use crate::utils::profiling::{FrameStats, ScopedDuration};
use crate::world::{SharedConfig, Simulation};

/// A single ball dropped from the top of its container.
///
/// The host calls [`Simulation::advance_tick`] once per frame and applies
/// [`BouncingBall::position`] as a vertical translation.
#[derive(Debug, Clone)]
pub struct BouncingBall {
    body: Body,
    config: SharedConfig,
    container: Container,
    stats: FrameStats,
}

impl BouncingBall {
    pub fn new(config: SharedConfig, container: Container) -> Self {
        if container.is_degenerate() {
            warn!(
                "container height {} leaves no room to fall, ball pinned at 0",
                container.height
            );
        }
        Self {
            body: Body::default(),
            config,
            container,
            stats: FrameStats::default(),
        }
    }

    /// Ball with the stock constants in a container of the given height.
    pub fn with_height(height: f64) -> Self {
        Self::new(
            SharedConfig::new(SimulationConfig::bouncing_ball()),
            Container::new(height),
        )
    }

    pub fn position(&self) -> f64 {
        self.body.position
    }

    pub fn velocity(&self) -> f64 {
        self.body.velocity
    }

    pub fn state(&self) -> BodyState {
        self.body.state()
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn config(&self) -> &SharedConfig {
        &self.config
    }

    /// Layout callback. Only the height is re-measured by the host.
    pub fn set_container_height(&mut self, height: f64) {
        self.container.height = height;
        if self.container.is_degenerate() {
            warn!("container height {height} leaves no room to fall, ball pinned at 0");
        }
    }

    pub fn set_container(&mut self, container: Container) {
        self.container = container;
        if container.is_degenerate() {
            warn!(
                "container height {} leaves no room to fall, ball pinned at 0",
                container.height
            );
        }
    }
}

impl Simulation for BouncingBall {
    fn advance_tick(&mut self) {
        if !self.body.is_active {
            return;
        }

        let config = self.config.current();
        let (body, contact) = {
            let _timer = ScopedDuration::new(&mut self.stats.integrate_time);
            step_with_contact(&self.body, &config, &self.container)
        };

        self.stats.ticks += 1;
        match contact {
            FloorContact::Bounced => {
                self.stats.bounces += 1;
                debug!("bounce, velocity now {:.3}", body.velocity);
            }
            FloorContact::CameToRest if !self.body.is_resting() => self.stats.rests += 1,
            FloorContact::CameToRest | FloorContact::None => {}
        }
        self.body = body;
    }

    fn reset(&mut self) {
        debug!("ball reset from y = {:.2}", self.body.position);
        self.body.reset();
    }

    fn is_running(&self) -> bool {
        self.body.is_active
    }

    fn set_running(&mut self, running: bool) {
        self.body.is_active = running;
    }

    fn stats(&self) -> &FrameStats {
        &self.stats
    }
}
