use glam::DVec2;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_BALL_SIZE, DEFAULT_DAMPING, DEFAULT_FLOOR_MARGIN, DEFAULT_GRAVITY,
    DEFAULT_PARTICLE_GRAVITY, DEFAULT_REST_VELOCITY_THRESHOLD, DEFAULT_RESPAWN_MARGIN,
    DEFAULT_SPAWN_JITTER, DEFAULT_SPAWN_VX_MAX, DEFAULT_SPAWN_VY_MAX, DEFAULT_SPEED_MULTIPLIER,
};

/// Physical constants read by every integration step.
///
/// The host owns this value; the integrator only borrows it for the
/// duration of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub gravity: f64,
    pub damping: f64,
    pub speed_multiplier: f64,
    pub rest_velocity_threshold: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::bouncing_ball()
    }
}

impl SimulationConfig {
    /// Constants used by the bouncing ball effect.
    pub fn bouncing_ball() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            damping: DEFAULT_DAMPING,
            speed_multiplier: DEFAULT_SPEED_MULTIPLIER,
            rest_velocity_threshold: DEFAULT_REST_VELOCITY_THRESHOLD,
        }
    }

    /// Constants used by the particle fountain. Particles never bounce, so
    /// only gravity and speed matter.
    pub fn particle_fountain() -> Self {
        Self {
            gravity: DEFAULT_PARTICLE_GRAVITY,
            damping: DEFAULT_DAMPING,
            speed_multiplier: DEFAULT_SPEED_MULTIPLIER,
            rest_velocity_threshold: 0.0,
        }
    }

    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::new()
    }

    /// Gravity actually added to velocity in one tick.
    #[inline]
    pub fn effective_gravity(&self) -> f64 {
        self.gravity * self.speed_multiplier
    }

    /// Returns a copy with every field inside its valid domain.
    ///
    /// Out-of-range fields fall back to the bouncing ball defaults so a bad
    /// value coming from the host's controls can never stall the frame loop.
    pub fn sanitized(&self) -> Self {
        let mut out = *self;

        if !out.gravity.is_finite() {
            warn!("gravity {} is not finite, using {}", out.gravity, DEFAULT_GRAVITY);
            out.gravity = DEFAULT_GRAVITY;
        }
        if !(out.damping > 0.0 && out.damping < 1.0) {
            warn!(
                "damping {} outside (0, 1), using {}",
                out.damping, DEFAULT_DAMPING
            );
            out.damping = DEFAULT_DAMPING;
        }
        if !(out.speed_multiplier > 0.0 && out.speed_multiplier.is_finite()) {
            warn!(
                "speed multiplier {} must be positive, using {}",
                out.speed_multiplier, DEFAULT_SPEED_MULTIPLIER
            );
            out.speed_multiplier = DEFAULT_SPEED_MULTIPLIER;
        }
        if !(out.rest_velocity_threshold >= 0.0 && out.rest_velocity_threshold.is_finite()) {
            warn!(
                "rest velocity threshold {} must be non-negative, using {}",
                out.rest_velocity_threshold, DEFAULT_REST_VELOCITY_THRESHOLD
            );
            out.rest_velocity_threshold = DEFAULT_REST_VELOCITY_THRESHOLD;
        }

        out
    }
}

pub struct SimulationConfigBuilder {
    config: SimulationConfig,
}

impl Default for SimulationConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: SimulationConfig::bouncing_ball(),
        }
    }

    pub fn gravity(mut self, gravity: f64) -> Self {
        self.config.gravity = gravity;
        self
    }

    pub fn damping(mut self, damping: f64) -> Self {
        self.config.damping = damping;
        self
    }

    pub fn speed_multiplier(mut self, speed: f64) -> Self {
        self.config.speed_multiplier = speed;
        self
    }

    pub fn rest_velocity_threshold(mut self, threshold: f64) -> Self {
        self.config.rest_velocity_threshold = threshold;
        self
    }

    pub fn build(self) -> SimulationConfig {
        self.config.sanitized()
    }
}

/// Measured layout of the ball's container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Container {
    pub height: f64,
    pub body_size: f64,
    pub floor_margin: f64,
}

impl Default for Container {
    fn default() -> Self {
        Self {
            height: 0.0,
            body_size: DEFAULT_BALL_SIZE,
            floor_margin: DEFAULT_FLOOR_MARGIN,
        }
    }
}

impl Container {
    pub fn new(height: f64) -> Self {
        Self {
            height,
            ..Self::default()
        }
    }

    /// Lowest position the body may occupy. Never negative.
    pub fn max_y(&self) -> f64 {
        let max_y = self.height - self.body_size - self.floor_margin;
        if max_y.is_finite() {
            max_y.max(0.0)
        } else {
            0.0
        }
    }

    /// True when the layout leaves no room to fall.
    pub fn is_degenerate(&self) -> bool {
        !(self.height > 0.0) || self.max_y() <= 0.0
    }
}

/// Visible area of the particle fountain.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Spawn policy for fountain particles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    pub spawn_point: DVec2,
    pub vx_max: f64,
    pub vy_max: f64,
    pub jitter: f64,
    pub respawn_margin: f64,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            spawn_point: DVec2::ZERO,
            vx_max: DEFAULT_SPAWN_VX_MAX,
            vy_max: DEFAULT_SPAWN_VY_MAX,
            jitter: DEFAULT_SPAWN_JITTER,
            respawn_margin: DEFAULT_RESPAWN_MARGIN,
        }
    }
}

impl EmitterConfig {
    /// Emitter sitting at the horizontal centre of `bounds`, right on the
    /// respawn line.
    pub fn centered(bounds: Bounds) -> Self {
        Self::default().recentered(bounds)
    }

    /// Same launch ranges and margin, spawn point moved to the centre of
    /// `bounds` on this emitter's respawn line.
    pub fn recentered(&self, bounds: Bounds) -> Self {
        Self {
            spawn_point: self.centre_of(bounds),
            ..*self
        }
    }

    /// Whether the spawn point sits where `recentered(bounds)` would put it.
    pub fn is_centered_in(&self, bounds: Bounds) -> bool {
        self.spawn_point == self.centre_of(bounds)
    }

    fn centre_of(&self, bounds: Bounds) -> DVec2 {
        DVec2::new(
            bounds.width * 0.5,
            (bounds.height - self.respawn_margin).max(0.0),
        )
    }

    /// Scales launch velocities by the host playback speed.
    pub fn with_speed(&self, speed: f64) -> Self {
        let speed = if speed > 0.0 && speed.is_finite() {
            speed
        } else {
            DEFAULT_SPEED_MULTIPLIER
        };
        Self {
            vx_max: self.vx_max * speed,
            vy_max: self.vy_max * speed,
            jitter: self.jitter * speed,
            ..*self
        }
    }

    /// Y coordinate past which a particle is recycled.
    #[inline]
    pub fn respawn_line(&self, bounds: &Bounds) -> f64 {
        bounds.height - self.respawn_margin
    }
}
