//! Global configuration constants for the frame physics kernel.
//!
//! The ball and fountain effects were tuned separately, so each keeps its
//! own gravity instead of sharing one value.

/// Gravity added to the ball's velocity every tick (display units per tick²).
pub const DEFAULT_GRAVITY: f64 = 0.5;

/// Gravity used by the particle fountain.
pub const DEFAULT_PARTICLE_GRAVITY: f64 = 0.2;

/// Fraction of velocity retained after a floor bounce.
pub const DEFAULT_DAMPING: f64 = 0.7;

/// Post-bounce speed below which the ball is pinned to the floor.
pub const DEFAULT_REST_VELOCITY_THRESHOLD: f64 = 0.5;

/// Host playback speed.
pub const DEFAULT_SPEED_MULTIPLIER: f64 = 1.0;

/// Edge length of the bouncing ball.
pub const DEFAULT_BALL_SIZE: f64 = 60.0;

/// Space kept free between the ball's resting spot and the container bottom.
pub const DEFAULT_FLOOR_MARGIN: f64 = 60.0;

/// Number of particles emitted by the fountain.
pub const DEFAULT_PARTICLE_COUNT: usize = 15;

/// Diameter of a fountain particle.
pub const DEFAULT_PARTICLE_SIZE: f64 = 10.0;

/// Distance above the bottom edge at which particles are recycled.
pub const DEFAULT_RESPAWN_MARGIN: f64 = 100.0;

/// Maximum horizontal launch speed (either direction).
pub const DEFAULT_SPAWN_VX_MAX: f64 = 3.0;

/// Minimum upward launch speed.
pub const DEFAULT_SPAWN_VY_MAX: f64 = 8.0;

/// Extra random upward speed added on top of [`DEFAULT_SPAWN_VY_MAX`].
pub const DEFAULT_SPAWN_JITTER: f64 = 4.0;

/// Frame budget at 60 Hz, in milliseconds.
pub const DEFAULT_FRAME_BUDGET_MS: f32 = 1000.0 / 60.0;
