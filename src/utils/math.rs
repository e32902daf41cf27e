//! Small numeric helpers layered on top of `f64` and `glam`.

use glam::DVec2;

/// Clamps `value` into `[min, max]`, mapping NaN to `min`.
#[inline]
pub fn clamp_finite(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// Returns `value` when finite, `fallback` otherwise.
#[inline]
pub fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Component-wise [`finite_or`].
#[inline]
pub fn finite_or_vec(value: DVec2, fallback: DVec2) -> DVec2 {
    DVec2::new(finite_or(value.x, fallback.x), finite_or(value.y, fallback.y))
}
