//! Domain-safe trigonometry and bearings.
//!
//! Dot products of unit vectors drift slightly outside `[-1, 1]` in float
//! arithmetic; every inverse trig call in the crate goes through these
//! helpers so that drift never turns into NaN.

use glam::Vec3;

/// Horizontal projections shorter than this are treated as vertical.
pub const DEGENERATE_EPSILON: f32 = 1e-6;

/// `acos` with its argument clamped to `[-1, 1]`. Radians.
#[inline]
#[must_use]
pub fn safe_acos(x: f32) -> f32 {
    x.clamp(-1.0, 1.0).acos()
}

/// `asin` with its argument clamped to `[-1, 1]`. Radians.
#[inline]
#[must_use]
pub fn safe_asin(x: f32) -> f32 {
    x.clamp(-1.0, 1.0).asin()
}

/// Unsigned angle between two unit vectors, in radians (`0..=π`).
#[inline]
#[must_use]
pub fn angle_between(a: Vec3, b: Vec3) -> f32 {
    safe_acos(a.dot(b))
}

/// Bearing of `v` projected onto the horizontal (XZ) plane, in degrees in
/// `[0, 360)`.
///
/// `+X` is 0°, `-Z` is 90°, `-X` is 180° and `+Z` is 270°, i.e. the yaw that
/// carries `+X` onto the projection when rotating about `+Y`. Returns `None`
/// when the projection is shorter than [`DEGENERATE_EPSILON`].
#[must_use]
pub fn bearing_degrees(v: Vec3) -> Option<f32> {
    let horizontal = Vec3::new(v.x, 0.0, v.z);
    if horizontal.length() < DEGENERATE_EPSILON {
        return None;
    }
    let bearing = (-v.z).atan2(v.x).to_degrees().rem_euclid(360.0);
    // rem_euclid can round a tiny negative up to exactly 360
    Some(if bearing >= 360.0 { 0.0 } else { bearing })
}
