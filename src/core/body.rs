use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Motion phase of a bouncing body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyState {
    Falling,
    Resting,
}

/// Single point mass moving along the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: f64,
    pub velocity: f64,
    pub is_active: bool,
    pub(crate) resting: bool,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            is_active: true,
            resting: false,
        }
    }
}

impl Body {
    pub fn new(position: f64, velocity: f64) -> Self {
        Self {
            position,
            velocity,
            ..Self::default()
        }
    }

    pub fn state(&self) -> BodyState {
        if self.resting {
            BodyState::Resting
        } else {
            BodyState::Falling
        }
    }

    #[inline]
    pub fn is_resting(&self) -> bool {
        self.resting
    }

    /// Moves the body back to the top with no velocity. The active flag is
    /// left alone so a paused body stays paused.
    pub fn reset(&mut self) {
        self.position = 0.0;
        self.velocity = 0.0;
        self.resting = false;
    }
}

/// Point mass moving in the plane, used by the fountain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: DVec2,
    pub velocity: DVec2,
    pub is_active: bool,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            velocity: DVec2::ZERO,
            is_active: true,
        }
    }
}

impl Particle {
    pub fn new(position: DVec2, velocity: DVec2) -> Self {
        Self {
            position,
            velocity,
            is_active: true,
        }
    }
}
