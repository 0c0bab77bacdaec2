//! Small scalar/vector helpers shared by both engines.

use glam::Vec2;
use std::f32::consts::TAU;

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn clamp01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Vector of `length` pointing along `angle` (radians, screen space).
#[inline]
pub fn polar(angle: f32, length: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(c, s) * length
}

/// Angle of slot `index` when `count` slots are spread evenly around a circle.
#[inline]
pub fn ring_angle(index: usize, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    index as f32 / count as f32 * TAU
}

/// Map an incoming time step into `[min, max]`.
///
/// NaN, infinities, zero and negative steps all collapse to `min` so a bad
/// clock reading can never reach the integrators.
#[inline]
pub fn sanitize_step(dt: f32, min: f32, max: f32) -> f32 {
    if !dt.is_finite() || dt <= 0.0 {
        return min;
    }
    dt.clamp(min, max)
}
