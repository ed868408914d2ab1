//! Pose of one camera relative to another.

use glam::Vec3;
use serde::Serialize;

use crate::camera::core::Camera;
use crate::math::angle_between;

/// Angular deviation between two camera frames.
///
/// Each field is the unsigned angle between corresponding basis vectors.
/// Radians unless produced by [`RelativePose::to_degrees`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RelativePose {
    /// Angle between the two right vectors.
    pub h_angle: f32,
    /// Angle between the two up vectors.
    pub v_angle: f32,
    /// Angle between the two look-at (forward) vectors.
    pub lookat_angle: f32,
}

impl RelativePose {
    /// Same pose with every angle converted from radians to degrees.
    #[must_use]
    pub fn to_degrees(self) -> Self {
        Self {
            h_angle: self.h_angle.to_degrees(),
            v_angle: self.v_angle.to_degrees(),
            lookat_angle: self.lookat_angle.to_degrees(),
        }
    }
}

/// Compare the orthonormal frames of `c1` and `c2`.
#[must_use]
pub fn relative_orientation(c1: &Camera, c2: &Camera) -> RelativePose {
    let b1 = c1.basis();
    let b2 = c2.basis();
    RelativePose {
        h_angle: angle_between(b1.right, b2.right),
        v_angle: angle_between(b1.up, b2.up),
        lookat_angle: angle_between(b1.forward, b2.forward),
    }
}

/// Euclidean distance between the two cameras' unit look-at vectors.
///
/// Despite the name this compares viewing directions, not positions: two
/// cameras facing the same way score 0 wherever they stand. Use
/// [`position_offset`] for the spatial relation.
#[must_use]
pub fn relative_position(c1: &Camera, c2: &Camera) -> f32 {
    c1.lookat().distance(c2.lookat())
}

/// Position of `to` expressed relative to `from`.
#[must_use]
pub fn position_offset(from: &Camera, to: &Camera) -> Vec3 {
    to.position - from.position
}
