//! Fixed-tick integration of a body falling onto a floor.
//!
//! Every call advances exactly one logical tick; no wall-clock time is
//! involved. Velocity is updated first and the new velocity moves the body
//! (semi-implicit Euler with a unit step).

use log::debug;

use crate::core::{Body, Container, SimulationConfig};
use crate::utils::math::clamp_finite;

/// What happened at the floor during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorContact {
    None,
    Bounced,
    CameToRest,
}

/// Advances one coordinate by a single tick under constant acceleration.
///
/// Returns `(position, velocity)`.
#[inline]
pub fn integrate_axis(position: f64, velocity: f64, acceleration: f64) -> (f64, f64) {
    let velocity = velocity + acceleration;
    (position + velocity, velocity)
}

/// Resolves a candidate position against the floor at `max_y`.
///
/// The velocity is reflected and damped at most once. `settling` marks a
/// body that began the tick on the floor while resting or rebounding; such a
/// body settles on contact regardless of the rest threshold. A body driven
/// down into the floor always bounces.
///
/// Returns the resolved `(position, velocity)` and the contact kind.
pub fn resolve_floor(
    candidate: f64,
    velocity: f64,
    max_y: f64,
    settling: bool,
    config: &SimulationConfig,
) -> (f64, f64, FloorContact) {
    if candidate > max_y {
        let bounced = -velocity * config.damping;
        if settling
            || bounced.abs() < config.rest_velocity_threshold
            || !bounced.is_finite()
        {
            (max_y, 0.0, FloorContact::CameToRest)
        } else {
            (max_y, bounced, FloorContact::Bounced)
        }
    } else {
        (candidate, velocity, FloorContact::None)
    }
}

/// Advances `body` by one tick and returns the new state.
pub fn step(body: &Body, config: &SimulationConfig, container: &Container) -> Body {
    step_with_contact(body, config, container).0
}

/// Same as [`step`] but also reports the floor contact, for bookkeeping.
pub fn step_with_contact(
    body: &Body,
    config: &SimulationConfig,
    container: &Container,
) -> (Body, FloorContact) {
    if !body.is_active {
        return (*body, FloorContact::None);
    }

    let max_y = container.max_y();
    let settling = body.position >= max_y && (body.resting || body.velocity <= 0.0);
    let (candidate, velocity) =
        integrate_axis(body.position, body.velocity, config.effective_gravity());

    if !velocity.is_finite() {
        // Nothing sensible to integrate; park the body where it is.
        let position = clamp_finite(body.position, 0.0, max_y);
        return (
            Body {
                position,
                velocity: 0.0,
                ..*body
            },
            FloorContact::None,
        );
    }

    let (position, velocity, contact) =
        resolve_floor(candidate, velocity, max_y, settling, config);
    let position = clamp_finite(position, 0.0, max_y);

    let resting = match contact {
        FloorContact::CameToRest => {
            if !body.resting {
                debug!("body came to rest at y = {max_y:.2}");
            }
            true
        }
        FloorContact::Bounced | FloorContact::None => false,
    };

    (
        Body {
            position,
            velocity,
            is_active: body.is_active,
            resting,
        },
        contact,
    )
}
