//! Rotation quaternions.
//!
//! A minimal Hamilton-product quaternion used by
//! [`rotate`](super::rotation::rotate). Quaternions here are transient:
//! built from an axis and an angle, applied, and dropped.

use std::ops::Mul;

use glam::Vec3;

/// A quaternion `w + xi + yj + zk`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    /// `i` component.
    pub x: f32,
    /// `j` component.
    pub y: f32,
    /// `k` component.
    pub z: f32,
    /// Scalar component.
    pub w: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// The identity rotation.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Rotation of `angle_degrees` about `axis`.
    ///
    /// `axis` must be unit length; this is not checked.
    #[must_use]
    pub fn from_axis_angle(axis: Vec3, angle_degrees: f32) -> Self {
        let half = (angle_degrees / 2.0).to_radians();
        let (sin_half, cos_half) = half.sin_cos();
        Self {
            x: axis.x * sin_half,
            y: axis.y * sin_half,
            z: axis.z * sin_half,
            w: cos_half,
        }
    }

    /// Negated vector part. Equals the inverse for unit quaternions.
    #[must_use]
    pub fn conjugate(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    /// Hamilton product `self * (v, 0)`.
    ///
    /// The result is an intermediate quaternion, not yet a rotated vector.
    #[must_use]
    pub fn mul_vector(self, v: Vec3) -> Self {
        Self {
            w: -(self.x * v.x) - (self.y * v.y) - (self.z * v.z),
            x: (self.w * v.x) + (self.y * v.z) - (self.z * v.y),
            y: (self.w * v.y) + (self.z * v.x) - (self.x * v.z),
            z: (self.w * v.z) + (self.x * v.y) - (self.y * v.x),
        }
    }

    /// Vector part as a [`Vec3`].
    #[must_use]
    pub fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Euclidean norm of all four components.
    #[must_use]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w)
            .sqrt()
    }
}

impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, r: Self) -> Self {
        let l = self;
        Self {
            w: (l.w * r.w) - (l.x * r.x) - (l.y * r.y) - (l.z * r.z),
            x: (l.x * r.w) + (l.w * r.x) + (l.y * r.z) - (l.z * r.y),
            y: (l.y * r.w) + (l.w * r.y) + (l.z * r.x) - (l.x * r.z),
            z: (l.z * r.w) + (l.w * r.z) + (l.x * r.y) - (l.y * r.x),
        }
    }
}

impl From<Quaternion> for glam::Quat {
    fn from(q: Quaternion) -> Self {
        Self::from_xyzw(q.x, q.y, q.z, q.w)
    }
}
